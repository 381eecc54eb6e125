//! JSON shapes for persisted panel state and layout options.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use zenarrange::{
    Arrangement, LayoutOptions, PanelDesc, PanelState, Rect, ShelfAxis, Size, Strategy,
    WindowId, WindowRegistry, WindowRequest,
};

#[test]
fn panel_state_survives_a_save_and_restore() {
    let mut reg = WindowRegistry::new(Size::new(1280, 800));
    reg.open("notes", PanelDesc::new("Notes", 320, 240)).unwrap();
    reg.move_to(&"notes".into(), 500, 300).unwrap();
    reg.hide(&"notes".into()).unwrap();

    let saved = serde_json::to_string(&reg.snapshot(&"notes".into()).unwrap()).unwrap();
    assert_eq!(
        saved,
        r#"{"left":500,"top":300,"width":320,"height":240,"hidden":true}"#
    );

    let state: PanelState = serde_json::from_str(&saved).unwrap();
    let mut fresh = WindowRegistry::new(Size::new(1280, 800));
    let panel = fresh
        .restore("notes", PanelDesc::new("Notes", 320, 240), state)
        .unwrap();
    assert_eq!(panel.bounds, Rect::new(500, 300, 320, 240));
    assert!(panel.hidden);
}

#[test]
fn strategy_names_and_alias() {
    assert_eq!(
        serde_json::to_string(&Strategy::MinResize).unwrap(),
        r#""min_resize""#
    );
    let s: Strategy = serde_json::from_str(r#""smarter""#).unwrap();
    assert_eq!(s, Strategy::MinResize);
    let s: Strategy = serde_json::from_str(r#""cascade""#).unwrap();
    assert_eq!(s, Strategy::Cascade);
}

#[test]
fn shelf_axis_uses_the_query_names() {
    assert_eq!(serde_json::to_string(&ShelfAxis::Column).unwrap(), r#""col""#);
    assert_eq!(serde_json::to_string(&ShelfAxis::Row).unwrap(), r#""row""#);
    for name in [r#""col""#, r#""column""#] {
        let axis: ShelfAxis = serde_json::from_str(name).unwrap();
        assert_eq!(axis, ShelfAxis::Column, "{name}");
    }
    let a: Arrangement =
        serde_json::from_str(r#"{"options":{"minResize":{"prefer":"col"}}}"#).unwrap();
    assert_eq!(a.options.min_resize.prefer, ShelfAxis::Column);
}

#[test]
fn window_ids_are_untagged() {
    let ids: Vec<WindowId> = serde_json::from_str(r#"[3, "editor"]"#).unwrap();
    assert_eq!(ids, vec![WindowId::Index(3), WindowId::Key("editor".into())]);
}

#[test]
fn requests_accept_partial_objects() {
    let reqs: Vec<WindowRequest> =
        serde_json::from_str(r#"[{"id":"a","width":640,"height":480,"minWidth":200},{}]"#)
            .unwrap();
    assert_eq!(reqs[0].id, Some(WindowId::Key("a".into())));
    assert_eq!(reqs[0].min_width, Some(200.0));
    assert_eq!(reqs[0].min_height, None);
    assert_eq!(reqs[1], WindowRequest::default());
}

#[test]
fn arrangement_fills_missing_options_with_defaults() {
    let a: Arrangement = serde_json::from_str(
        r#"{"strategy":"min_resize","options":{"gap":4,"minResize":{"prefer":"column"}}}"#,
    )
    .unwrap();
    assert_eq!(
        a,
        Arrangement::new(Strategy::MinResize)
            .gap(4.0)
            .prefer(ShelfAxis::Column)
    );

    let empty: LayoutOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, LayoutOptions::default());
}
