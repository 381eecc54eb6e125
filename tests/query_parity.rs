//! Query strings must produce the same layouts as the equivalent builder calls.

#![cfg(feature = "query")]

use zenarrange::query::{self, ParseWarning};
use zenarrange::{Arrangement, PlacedRect, ShelfAxis, Strategy, WindowRequest, Workspace};

fn windows() -> Vec<WindowRequest> {
    vec![
        WindowRequest::new(520.0, 380.0).id("A"),
        WindowRequest::new(640.0, 420.0).id("B"),
        WindowRequest::new(480.0, 360.0).min_size(300.0, 200.0).id("C"),
        WindowRequest::new(800.0, 600.0).id("D"),
        WindowRequest::new(300.0, 900.0).id("E"),
    ]
}

fn query_layout(q: &str, ws: &Workspace) -> Vec<PlacedRect> {
    let result = query::parse(q);
    assert!(
        result.warnings.is_empty(),
        "unexpected warnings for {q:?}: {:?}",
        result.warnings
    );
    result.arrangement.compute(ws, &windows())
}

#[test]
fn parity_with_builder() {
    let ws = Workspace::new(1440, 900).padding(12.0).gap(8.0);
    let cases: Vec<(&str, Arrangement)> = vec![
        ("", Arrangement::new(Strategy::Tile)),
        ("mode=tile&aspect=true", Arrangement::new(Strategy::Tile).preserve_aspect(true)),
        ("?layout=tile&gap=0&pad=0", Arrangement::new(Strategy::Tile).gap(0.0).padding(0.0)),
        ("mode=cascade", Arrangement::new(Strategy::Cascade)),
        (
            "mode=cascade&offsetx=40&offset_y=24&scale=0.7",
            Arrangement::new(Strategy::Cascade)
                .offsets(40.0, 24.0)
                .base_scale(0.7),
        ),
        ("strategy=cascade&offset=16", Arrangement::new(Strategy::Cascade).offsets(16.0, 16.0)),
        ("mode=smart", Arrangement::new(Strategy::Smart)),
        ("mode=smart&minaspect=0", Arrangement::new(Strategy::Smart).min_aspect(0.0)),
        ("mode=smarter", Arrangement::new(Strategy::MinResize)),
        (
            "mode=min_resize&prefer=col&gap=2",
            Arrangement::new(Strategy::MinResize)
                .prefer(ShelfAxis::Column)
                .gap(2.0),
        ),
        ("MODE=Smart&Padding=%32%30", Arrangement::new(Strategy::Smart).padding(20.0)),
    ];

    for (q, builder) in &cases {
        assert_eq!(query::parse(q).arrangement, *builder, "arrangement for {q:?}");
        assert_eq!(
            query_layout(q, &ws),
            builder.compute(&ws, &windows()),
            "layout for {q:?}"
        );
    }
}

#[test]
fn bad_values_fall_back_to_defaults() {
    let ws = Workspace::new(1280, 800);
    let result = query::parse("mode=spiral&gap=-3&prefer=diagonal");
    assert_eq!(result.warnings.len(), 3);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
    );
    assert_eq!(
        result.arrangement.compute(&ws, &windows()),
        Arrangement::default().compute(&ws, &windows())
    );
}

#[test]
fn last_duplicate_wins() {
    let result = query::parse("mode=tile&mode=cascade");
    assert_eq!(result.arrangement.strategy, Strategy::Cascade);
    assert_eq!(
        result.warnings,
        vec![ParseWarning::DuplicateKey {
            key: "mode".into(),
            value: "cascade".into(),
        }]
    );
}
