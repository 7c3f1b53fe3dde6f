//! Behavior of the helper operations against the in-memory backend.

use approx::assert_abs_diff_eq;
use map_helpers::{
    create_icon, Container, HelperConfig, IconOptions, LatLng, MapBackend, MapHelpers, MapOptions,
    MarkerOptions, MemoryBackend, MemoryError, MemoryMap, MemoryTileLayer, Point, TileIndex,
    TileLayerOptions,
};

const OSM_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn setup() -> (MapHelpers<MemoryBackend>, MemoryMap) {
    init_logger();
    let helpers = MapHelpers::new(MemoryBackend::new());
    let map = helpers
        .create_map(&Container::new("map"), &MapOptions::default())
        .unwrap();
    (helpers, map)
}

fn add_tile_layer(
    helpers: &MapHelpers<MemoryBackend>,
    map: &mut MemoryMap,
    options: &TileLayerOptions,
) -> MemoryTileLayer {
    tokio_test::block_on(helpers.create_tile_layer(map, OSM_URL, options)).unwrap()
}

#[test]
fn empty_icon_options_give_builtin_defaults() {
    let icon = create_icon(IconOptions::default());

    assert_eq!(icon.icon_url(), Some("marker-icon.png"));
    assert_eq!(icon.shadow_url(), Some("marker-shadow.png"));
    assert_eq!(icon.icon_size(), Some(Point::new(25.0, 41.0)));
    assert_eq!(icon.icon_anchor(), Some(Point::new(12.0, 41.0)));
    assert_eq!(icon.options(), &IconOptions::builtin());
}

#[test]
fn icon_size_override_keeps_other_defaults() {
    let icon = create_icon(IconOptions::default().with_icon_size(10.0, 10.0));

    assert_eq!(icon.icon_size(), Some(Point::new(10.0, 10.0)));
    assert_eq!(icon.icon_url(), Some("marker-icon.png"));
    assert_eq!(icon.shadow_url(), Some("marker-shadow.png"));
    assert_eq!(icon.icon_anchor(), Some(Point::new(12.0, 41.0)));
}

#[test]
fn marker_is_attached_to_map_by_default() {
    let (helpers, mut map) = setup();
    assert!(map.markers().is_empty());

    let position = LatLng::new(28.68, 115.89);
    let marker = helpers
        .create_marker(&mut map, position, MarkerOptions::default())
        .unwrap();

    assert_eq!(map.markers().len(), 1);
    assert!(map.has_marker(&marker));
    assert_eq!(marker.map_id(), Some(map.id()));
    assert_eq!(marker.position(), position);
}

#[test]
fn marker_gets_default_icon() {
    let (helpers, mut map) = setup();
    let marker = helpers
        .create_marker(&mut map, LatLng::new(0.0, 0.0), MarkerOptions::default())
        .unwrap();

    let icon = marker.icon().unwrap();
    assert_eq!(icon, &create_icon(IconOptions::default()));
}

#[test]
fn caller_icon_survives_icon_injection() {
    let (helpers, mut map) = setup();
    let own_icon = create_icon(IconOptions::default().with_icon_url("/assets/depot.png"));

    let marker = helpers
        .create_marker(
            &mut map,
            LatLng::new(0.0, 0.0),
            MarkerOptions::default()
                .with_icon(own_icon.clone())
                .with_auto_add_icon(true),
        )
        .unwrap();

    assert_eq!(marker.icon(), Some(&own_icon));
}

#[test]
fn batch_markers_are_never_attached() {
    let (helpers, map) = setup();
    let positions = [
        LatLng::new(28.1, 115.1),
        LatLng::new(28.2, 115.2),
        LatLng::new(28.3, 115.3),
    ];

    let markers = helpers
        .create_markers(positions, &MarkerOptions::default())
        .unwrap();

    assert_eq!(markers.len(), 3);
    for (marker, position) in markers.iter().zip(positions) {
        assert_eq!(marker.position(), position);
        assert!(!marker.is_attached());
        assert!(marker.icon().is_some());
    }
    assert!(map.markers().is_empty());
}

#[test]
fn batch_markers_on_map_are_attached() {
    let (helpers, mut map) = setup();
    let positions = [LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)];
    let options = MarkerOptions::default().with_title("stop");

    let markers = helpers
        .create_markers_on(&mut map, positions, &options)
        .unwrap();

    assert_eq!(map.markers().len(), 2);
    for marker in &markers {
        assert!(map.has_marker(marker));
        assert_eq!(marker.options().title.as_deref(), Some("stop"));
    }
}

#[test]
fn batch_stops_at_first_invalid_position() {
    let (helpers, _) = setup();
    let err = helpers
        .create_markers(
            [LatLng::new(1.0, 1.0), LatLng::new(f64::NAN, 1.0)],
            &MarkerOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(err, MemoryError::InvalidLatLng(_)));
}

#[test]
fn tile_layer_resets_view() {
    init_logger();
    let helpers = MapHelpers::new(MemoryBackend::new());
    let mut map = helpers
        .create_map(
            &Container::new("map"),
            &MapOptions::default().with_view((51.5, -0.12), 13.0),
        )
        .unwrap();
    assert_eq!(map.zoom(), Some(13.0));

    let options = TileLayerOptions::default().with_attribution("OpenStreetMap contributors");
    let layer = add_tile_layer(&helpers, &mut map, &options);

    let center = map.center().unwrap();
    assert_abs_diff_eq!(center.lat, 28.34, epsilon = 1e-9);
    assert_abs_diff_eq!(center.lng, 115.56, epsilon = 1e-9);
    assert_eq!(map.zoom(), Some(7.0));

    assert_eq!(map.tile_layers().len(), 1);
    assert_eq!(layer.map_id(), Some(map.id()));
    let url = layer.tile_url(TileIndex::new(7, 105, 53)).unwrap();
    assert_eq!(url, "https://c.tile.openstreetmap.org/7/105/53.png");
}

#[tokio::test]
async fn every_tile_layer_resets_view_again() {
    let (helpers, mut map) = setup();

    helpers
        .create_tile_layer(&mut map, OSM_URL, &TileLayerOptions::default())
        .await
        .unwrap();
    helpers
        .backend()
        .set_view(&mut map, LatLng::new(0.0, 0.0), 2.0)
        .unwrap();
    helpers
        .create_tile_layer(&mut map, OSM_URL, &TileLayerOptions::default())
        .await
        .unwrap();

    assert_eq!(map.center(), Some(LatLng::new(28.34, 115.56)));
    assert_eq!(map.zoom(), Some(7.0));
    assert_eq!(map.tile_layers().len(), 2);
}

#[test]
fn subdomain_list_reaches_tile_urls() {
    let (helpers, mut map) = setup();
    let options: TileLayerOptions =
        serde_json::from_str(r#"{"subdomains": ["otile1", "otile2", "otile3"]}"#).unwrap();

    let layer = add_tile_layer(&helpers, &mut map, &options);

    let url = layer.tile_url(TileIndex::new(5, 3, 2)).unwrap();
    assert_eq!(url, "https://otile3.tile.openstreetmap.org/5/3/2.png");
}

#[test]
fn same_container_gives_independent_maps() {
    let (helpers, _) = setup();
    let container = Container::new("map");

    let mut first = helpers
        .create_map(&container, &MapOptions::default())
        .unwrap();
    let second = helpers
        .create_map(&container, &MapOptions::default())
        .unwrap();

    assert_ne!(first.id(), second.id());
    let position = LatLng::new(1.0, 1.0);
    helpers
        .create_marker(&mut first, position, MarkerOptions::default())
        .unwrap();
    assert_eq!(first.markers().len(), 1);
    assert!(second.markers().is_empty());
}

#[test]
fn backend_errors_propagate_unchanged() {
    let (helpers, mut map) = setup();

    let err = helpers
        .create_map(&Container::new(""), &MapOptions::default())
        .unwrap_err();
    assert_eq!(err, MemoryError::ContainerNotFound(String::new()));

    let position = LatLng::new(f64::NAN, 0.0);
    let err = helpers
        .create_marker(&mut map, position, MarkerOptions::default())
        .unwrap_err();
    assert!(matches!(err, MemoryError::InvalidLatLng(_)));
    assert!(map.markers().is_empty());
}

#[test]
fn config_file_controls_helpers() {
    init_logger();
    let config = HelperConfig::from_json_str(
        r#"{
            "icon": {"iconUrl": "/static/pin.png", "iconSize": [32, 32]},
            "marker": {"autoAddMap": false},
            "tileLayer": {"resetView": null}
        }"#,
    )
    .unwrap();
    let helpers = MapHelpers::with_config(MemoryBackend::new(), config);
    let mut map = helpers
        .create_map(
            &Container::new("map"),
            &MapOptions::default().with_view((10.0, 10.0), 3.0),
        )
        .unwrap();

    let position = LatLng::new(10.0, 10.0);
    let marker = helpers
        .create_marker(&mut map, position, MarkerOptions::default())
        .unwrap();
    let icon = marker.icon().unwrap();
    assert_eq!(icon.icon_url(), Some("/static/pin.png"));
    assert_eq!(icon.icon_size(), Some(Point::new(32.0, 32.0)));
    assert_eq!(icon.icon_anchor(), Some(Point::new(12.0, 41.0)));
    assert!(map.markers().is_empty());

    add_tile_layer(&helpers, &mut map, &TileLayerOptions::default());
    assert_eq!(map.center(), Some(position));
    assert_eq!(map.zoom(), Some(3.0));
}
