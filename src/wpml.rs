//! WPML document rendering
//!
//! Renders the two XML documents of a WPMZ mission archive. Element names
//! and order match what the WaypointMap and DJI Fly consumers accept;
//! numeric fields use plain `Display` formatting, execute heights are
//! truncated to whole meters.

use crate::error::Result;
use crate::types::Waypoint;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use std::io;
use std::io::Write;

/// Path of the template document inside the KMZ archive
pub const TEMPLATE_PATH: &str = "wpmz/template.kml";
/// Path of the waylines document inside the KMZ archive
pub const WAYLINES_PATH: &str = "wpmz/waylines.wpml";

const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const WPML_NAMESPACE: &str = "http://www.dji.com/wpmz/1.0.2";

/// Drone identifier pair expected by the consumers (DJI Mini series)
const DRONE_ENUM_VALUE: &str = "68";
const DRONE_SUB_ENUM_VALUE: &str = "0";

/// Everything the two documents are rendered from
pub(crate) struct MissionParams<'a> {
    pub author: &'a str,
    pub timestamp_ms: i64,
    pub speed_mps: f64,
    pub gimbal_pitch_deg: f64,
    pub waypoints: &'a [Waypoint],
}

/// Render `wpmz/template.kml`: author, timestamps and the mission config
pub(crate) fn render_template(params: &MissionParams) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_document(&mut writer, |w| {
        text_element(w, "wpml:author", params.author)?;
        text_element(w, "wpml:createTime", &params.timestamp_ms.to_string())?;
        text_element(w, "wpml:updateTime", &params.timestamp_ms.to_string())?;
        write_mission_config(w, params.speed_mps)
    })?;
    Ok(writer.into_inner())
}

/// Render `wpmz/waylines.wpml`: the mission config, the wayline folder and
/// one placemark per waypoint
pub(crate) fn render_waylines(params: &MissionParams) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_document(&mut writer, |w| {
        write_mission_config(w, params.speed_mps)?;

        let folder = BytesStart::new("Folder");
        w.write_event(Event::Start(folder.borrow()))?;

        text_element(w, "wpml:templateId", "0")?;
        text_element(w, "wpml:executeHeightMode", "relativeToStartPoint")?;
        text_element(w, "wpml:waylineId", "0")?;
        text_element(w, "wpml:distance", "0")?;
        text_element(w, "wpml:duration", "0")?;
        text_element(w, "wpml:autoFlightSpeed", &params.speed_mps.to_string())?;

        for (index, waypoint) in params.waypoints.iter().enumerate() {
            write_placemark(w, params, index, waypoint)?;
        }

        w.write_event(Event::End(folder.to_end()))?;
        Ok(())
    })?;
    Ok(writer.into_inner())
}

/// Write the XML declaration and the `<kml><Document>` envelope around `body`
fn write_document<W, F>(w: &mut Writer<W>, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> io::Result<()>,
{
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut kml = BytesStart::new("kml");
    kml.push_attribute(("xmlns", KML_NAMESPACE));
    kml.push_attribute(("xmlns:wpml", WPML_NAMESPACE));
    w.write_event(Event::Start(kml.borrow()))?;

    let document = BytesStart::new("Document");
    w.write_event(Event::Start(document.borrow()))?;

    body(w)?;

    w.write_event(Event::End(document.to_end()))?;
    w.write_event(Event::End(kml.to_end()))?;
    Ok(())
}

/// The `wpml:missionConfig` block shared by both documents
fn write_mission_config<W: Write>(w: &mut Writer<W>, speed_mps: f64) -> io::Result<()> {
    let config = BytesStart::new("wpml:missionConfig");
    w.write_event(Event::Start(config.borrow()))?;

    text_element(w, "wpml:flyToWaylineMode", "safely")?;
    text_element(w, "wpml:finishAction", "noAction")?;
    text_element(w, "wpml:exitOnRCLost", "executeLostAction")?;
    text_element(w, "wpml:executeRCLostAction", "hover")?;
    text_element(w, "wpml:globalTransitionalSpeed", &speed_mps.to_string())?;

    let info = BytesStart::new("wpml:droneInfo");
    w.write_event(Event::Start(info.borrow()))?;
    text_element(w, "wpml:droneEnumValue", DRONE_ENUM_VALUE)?;
    text_element(w, "wpml:droneSubEnumValue", DRONE_SUB_ENUM_VALUE)?;
    w.write_event(Event::End(info.to_end()))?;

    w.write_event(Event::End(config.to_end()))?;
    Ok(())
}

/// One `<Placemark>` with its heading/turn parameters and action groups
fn write_placemark<W: Write>(
    w: &mut Writer<W>,
    params: &MissionParams,
    index: usize,
    waypoint: &Waypoint,
) -> io::Result<()> {
    let placemark = BytesStart::new("Placemark");
    w.write_event(Event::Start(placemark.borrow()))?;

    let point = BytesStart::new("Point");
    w.write_event(Event::Start(point.borrow()))?;
    text_element(
        w,
        "coordinates",
        &format!("{},{}", waypoint.position.longitude, waypoint.position.latitude),
    )?;
    w.write_event(Event::End(point.to_end()))?;

    text_element(w, "wpml:index", &index.to_string())?;
    // execute heights are whole meters
    text_element(w, "wpml:executeHeight", &(waypoint.altitude_m as i64).to_string())?;
    text_element(w, "wpml:waypointSpeed", &params.speed_mps.to_string())?;

    let heading = BytesStart::new("wpml:waypointHeadingParam");
    w.write_event(Event::Start(heading.borrow()))?;
    text_element(w, "wpml:waypointHeadingMode", "smoothTransition")?;
    text_element(w, "wpml:waypointHeadingAngle", &waypoint.heading_deg.to_string())?;
    text_element(w, "wpml:waypointPoiPoint", "0.000000,0.000000,0.000000")?;
    text_element(
        w,
        "wpml:waypointHeadingAngleEnable",
        if waypoint.heading_enabled { "1" } else { "0" },
    )?;
    text_element(w, "wpml:waypointHeadingPathMode", "followBadArc")?;
    w.write_event(Event::End(heading.to_end()))?;

    let turn = BytesStart::new("wpml:waypointTurnParam");
    w.write_event(Event::Start(turn.borrow()))?;
    text_element(w, "wpml:waypointTurnMode", waypoint.turn_mode.as_wpml())?;
    text_element(w, "wpml:waypointTurnDampingDist", "0")?;
    w.write_event(Event::End(turn.to_end()))?;

    text_element(w, "wpml:useStraightLine", "0")?;

    // Action IDs increment monotonically across the document starting at 1:
    // waypoint 0 consumes 1 and 2, waypoint k > 0 consumes k + 2.
    if index == 0 {
        write_gimbal_rotate_group(w, params.gimbal_pitch_deg, 1)?;
        write_evenly_rotate_group(w, params.gimbal_pitch_deg, 0, params.waypoints.len() - 1, 2)?;
    } else {
        write_evenly_rotate_group(w, params.gimbal_pitch_deg, index, index, index + 2)?;
    }

    w.write_event(Event::End(placemark.to_end()))?;
    Ok(())
}

/// Action group 1: one-shot absolute-angle gimbal pitch at the first waypoint
fn write_gimbal_rotate_group<W: Write>(
    w: &mut Writer<W>,
    gimbal_pitch_deg: f64,
    action_id: usize,
) -> io::Result<()> {
    write_action_group(w, 1, 0, 0, |w| {
        let action = BytesStart::new("wpml:action");
        w.write_event(Event::Start(action.borrow()))?;
        text_element(w, "wpml:actionId", &action_id.to_string())?;
        text_element(w, "wpml:actionActuatorFunc", "gimbalRotate")?;

        let param = BytesStart::new("wpml:actionActuatorFuncParam");
        w.write_event(Event::Start(param.borrow()))?;
        text_element(w, "wpml:gimbalHeadingYawBase", "aircraft")?;
        text_element(w, "wpml:gimbalRotateMode", "absoluteAngle")?;
        text_element(w, "wpml:gimbalPitchRotateEnable", "1")?;
        text_element(w, "wpml:gimbalPitchRotateAngle", &gimbal_pitch_deg.to_string())?;
        text_element(w, "wpml:gimbalRollRotateEnable", "0")?;
        text_element(w, "wpml:gimbalRollRotateAngle", "0")?;
        text_element(w, "wpml:gimbalYawRotateEnable", "0")?;
        text_element(w, "wpml:gimbalYawRotateAngle", "0")?;
        text_element(w, "wpml:gimbalRotateTimeEnable", "0")?;
        text_element(w, "wpml:gimbalRotateTime", "0")?;
        text_element(w, "wpml:payloadPositionIndex", "0")?;
        w.write_event(Event::End(param.to_end()))?;

        w.write_event(Event::End(action.to_end()))?;
        Ok(())
    })
}

/// Continuous gimbal pitch ("evenly" rotate) action group
///
/// The group id repeats 2 on every waypoint after the first; the consumers
/// key on the action id, which stays unique.
fn write_evenly_rotate_group<W: Write>(
    w: &mut Writer<W>,
    gimbal_pitch_deg: f64,
    start_index: usize,
    end_index: usize,
    action_id: usize,
) -> io::Result<()> {
    write_action_group(w, 2, start_index, end_index, |w| {
        let action = BytesStart::new("wpml:action");
        w.write_event(Event::Start(action.borrow()))?;
        text_element(w, "wpml:actionId", &action_id.to_string())?;
        text_element(w, "wpml:actionActuatorFunc", "gimbalEvenlyRotate")?;

        let param = BytesStart::new("wpml:actionActuatorFuncParam");
        w.write_event(Event::Start(param.borrow()))?;
        text_element(w, "wpml:gimbalPitchRotateAngle", &gimbal_pitch_deg.to_string())?;
        text_element(w, "wpml:payloadPositionIndex", "0")?;
        w.write_event(Event::End(param.to_end()))?;

        w.write_event(Event::End(action.to_end()))?;
        Ok(())
    })
}

/// The `wpml:actionGroup` envelope: id, index span, parallel mode and the
/// reach-point trigger
fn write_action_group<W, F>(
    w: &mut Writer<W>,
    group_id: usize,
    start_index: usize,
    end_index: usize,
    body: F,
) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> io::Result<()>,
{
    let group = BytesStart::new("wpml:actionGroup");
    w.write_event(Event::Start(group.borrow()))?;

    text_element(w, "wpml:actionGroupId", &group_id.to_string())?;
    text_element(w, "wpml:actionGroupStartIndex", &start_index.to_string())?;
    text_element(w, "wpml:actionGroupEndIndex", &end_index.to_string())?;
    text_element(w, "wpml:actionGroupMode", "parallel")?;

    let trigger = BytesStart::new("wpml:actionTrigger");
    w.write_event(Event::Start(trigger.borrow()))?;
    text_element(w, "wpml:actionTriggerType", "reachPoint")?;
    w.write_event(Event::End(trigger.to_end()))?;

    body(w)?;

    w.write_event(Event::End(group.to_end()))?;
    Ok(())
}

fn text_element<W: Write>(w: &mut Writer<W>, name: &str, value: &str) -> io::Result<()> {
    let element = BytesStart::new(name);
    w.write_event(Event::Start(element.borrow()))?;
    w.write_event(Event::Text(BytesText::new(value)))?;
    w.write_event(Event::End(element.to_end()))?;
    Ok(())
}
