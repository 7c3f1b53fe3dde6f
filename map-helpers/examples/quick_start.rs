//! Creates a map with an OSM tile layer and a few markers, then prints what ended up on it.
//! Run with: cargo run --example quick_start [config.json]

use map_helpers::{
    Container, HelperConfig, LatLng, MapHelpers, MapOptions, MarkerOptions, MemoryBackend,
    TileIndex, TileLayerOptions,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => HelperConfig::from_file(path)?,
        None => HelperConfig::default(),
    };
    let helpers = MapHelpers::with_config(MemoryBackend::new(), config);

    let mut map = helpers.create_map(
        &Container::new("map").with_size(1024, 768),
        &MapOptions::default()
            .with_view((28.68, 115.89), 11.0)
            .with_zoom_bounds(3.0, 18.0),
    )?;

    let layer = helpers
        .create_tile_layer(
            &mut map,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            &TileLayerOptions::default().with_attribution("© OpenStreetMap contributors"),
        )
        .await?;

    helpers.create_marker(
        &mut map,
        LatLng::new(28.68, 115.89),
        MarkerOptions::default().with_title("Nanchang"),
    )?;
    helpers.create_markers_on(
        &mut map,
        [LatLng::new(29.71, 116.0), LatLng::new(27.81, 114.4)],
        &MarkerOptions::default(),
    )?;

    let (center, zoom) = (map.center(), map.zoom());
    println!("map {} at {center:?}, zoom {zoom:?}", map.id());

    let first_tile = layer.tile_url(TileIndex::new(7, 105, 53))?;
    println!("first tile: {first_tile}");

    for marker in map.markers() {
        let position = marker.position();
        let title = marker.options().title.as_deref().unwrap_or("untitled");
        println!("marker {} at {position:?} ({title})", marker.id());
    }

    Ok(())
}
