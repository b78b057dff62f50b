use claims::assert_matches;
use insta::assert_snapshot;
use survey_wpml::wpml::{TEMPLATE_PATH, WAYLINES_PATH};
use survey_wpml::{
    CameraSpec, Error, FlightSpec, GeoPoint, MissionWriter, Rectangle, plan_rectangle,
};

fn planned_writer() -> MissionWriter {
    let rect = Rectangle::new([
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.001),
        GeoPoint::new(0.001, 0.001),
        GeoPoint::new(0.001, 0.0),
    ]);
    let camera = CameraSpec::new(6.17, 4.55, 4.5).unwrap();
    let flight = FlightSpec::new(50.0, 0.8, 0.8).unwrap();

    let scan = plan_rectangle(&rect, &camera, &flight).unwrap();
    let mut writer = MissionWriter::new(&scan);
    writer.with_timestamp_ms(1_700_000_000_000);
    writer
}

#[test]
fn archive_paths_are_stable() {
    assert_eq!(TEMPLATE_PATH, "wpmz/template.kml");
    assert_eq!(WAYLINES_PATH, "wpmz/waylines.wpml");
}

#[test]
fn template_document_snapshot() {
    let docs = planned_writer().render().unwrap();
    let template = String::from_utf8(docs.template_kml).unwrap();

    assert_snapshot!(template, @r#"<?xml version="1.0" encoding="UTF-8"?><kml xmlns="http://www.opengis.net/kml/2.2" xmlns:wpml="http://www.dji.com/wpmz/1.0.2"><Document><wpml:author>fly</wpml:author><wpml:createTime>1700000000000</wpml:createTime><wpml:updateTime>1700000000000</wpml:updateTime><wpml:missionConfig><wpml:flyToWaylineMode>safely</wpml:flyToWaylineMode><wpml:finishAction>noAction</wpml:finishAction><wpml:exitOnRCLost>executeLostAction</wpml:exitOnRCLost><wpml:executeRCLostAction>hover</wpml:executeRCLostAction><wpml:globalTransitionalSpeed>2.5</wpml:globalTransitionalSpeed><wpml:droneInfo><wpml:droneEnumValue>68</wpml:droneEnumValue><wpml:droneSubEnumValue>0</wpml:droneSubEnumValue></wpml:droneInfo></wpml:missionConfig></Document></kml>"#);
}

#[test]
fn waylines_placemark_and_action_structure() {
    let docs = planned_writer().render().unwrap();
    let waylines = String::from_utf8(docs.waylines_wpml).unwrap();

    // the end-to-end square plans 12 lines x 10 points
    let n = 120;

    assert_eq!(waylines.matches("<Placemark>").count(), n);
    // waypoint 0 carries two action groups, every other waypoint one
    assert_eq!(waylines.matches("<wpml:actionGroup>").count(), n + 1);
    assert_eq!(waylines.matches("<wpml:actionGroupId>1</wpml:actionGroupId>").count(), 1);
    assert_eq!(waylines.matches("<wpml:actionGroupId>2</wpml:actionGroupId>").count(), n);
    assert_eq!(waylines.matches("gimbalRotate<").count(), 1);
    assert_eq!(waylines.matches("gimbalEvenlyRotate<").count(), n);

    // the whole-mission group spans index 0 to the last waypoint
    assert!(waylines.contains("<wpml:actionGroupEndIndex>119</wpml:actionGroupEndIndex>"));

    // action ids increment monotonically across the document starting at 1
    for action_id in 1..=(n + 1) {
        assert_eq!(
            waylines
                .matches(&format!("<wpml:actionId>{action_id}</wpml:actionId>"))
                .count(),
            1,
            "action id {action_id} not unique"
        );
    }
}

#[test]
fn waylines_heading_and_turn_parameters() {
    let docs = planned_writer().render().unwrap();
    let waylines = String::from_utf8(docs.waylines_wpml).unwrap();

    // only the first waypoint stops and enforces its heading
    assert_eq!(
        waylines
            .matches("<wpml:waypointTurnMode>toPointAndStopWithContinuityCurvature</wpml:waypointTurnMode>")
            .count(),
        1
    );
    assert_eq!(
        waylines
            .matches("<wpml:waypointTurnMode>toPointAndPassWithContinuityCurvature</wpml:waypointTurnMode>")
            .count(),
        119
    );
    assert_eq!(
        waylines
            .matches("<wpml:waypointHeadingAngleEnable>1</wpml:waypointHeadingAngleEnable>")
            .count(),
        1
    );

    // serpentine lines alternate eastbound (-90) and westbound (90)
    assert!(waylines.contains("<wpml:waypointHeadingAngle>-90</wpml:waypointHeadingAngle>"));
    assert!(waylines.contains("<wpml:waypointHeadingAngle>90</wpml:waypointHeadingAngle>"));

    // altitude 50.0 truncates to a whole-meter execute height
    assert_eq!(
        waylines.matches("<wpml:executeHeight>50</wpml:executeHeight>").count(),
        120
    );

    // default speed appears as the waypoint speed on every placemark
    assert_eq!(
        waylines.matches("<wpml:waypointSpeed>2.5</wpml:waypointSpeed>").count(),
        120
    );
}

#[test]
fn fractional_altitude_is_truncated() {
    let rect = Rectangle::new([
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.001),
        GeoPoint::new(0.001, 0.001),
        GeoPoint::new(0.001, 0.0),
    ]);
    let camera = CameraSpec::new(6.17, 4.55, 4.5).unwrap();
    let flight = FlightSpec::new(42.7, 0.8, 0.8).unwrap();

    let scan = plan_rectangle(&rect, &camera, &flight).unwrap();
    let docs = MissionWriter::new(&scan).render().unwrap();
    let waylines = String::from_utf8(docs.waylines_wpml).unwrap();

    assert!(waylines.contains("<wpml:executeHeight>42</wpml:executeHeight>"));
    assert!(!waylines.contains("<wpml:executeHeight>42.7</wpml:executeHeight>"));
}

#[test]
fn out_of_range_writer_parameters_surface_the_field() {
    let mut writer = planned_writer();
    writer.with_speed(20.0);

    assert_matches!(
        writer.render(),
        Err(Error::InputOutOfRange { field: "speed_mps", .. })
    );
}
