//! Tests for coordinate conversion

use super::*;

#[test]
fn test_new_york_city_at_zoom_16() {
    // New York City: 40.7128°N, 74.0060°W
    let pixel = geo_to_world_pixel(40.7128, -74.0060);
    let tile = tile_address_of(pixel, 16);

    assert_eq!(tile.x, 19295, "NYC longitude should map to column 19295");
    assert_eq!(tile.y, 24640, "NYC latitude should map to row 24640");
    assert_eq!(tile.zoom, 16);
}

#[test]
fn test_london_at_zoom_10() {
    let tile = tile_address_of(geo_to_world_pixel(51.5074, -0.1278), 10);
    assert_eq!((tile.x, tile.y), (511, 340));
}

#[test]
fn test_equator_prime_meridian_is_world_center() {
    let pixel = geo_to_world_pixel(0.0, 0.0);
    assert_eq!(pixel, WorldPixel::new(WORLD_SIZE / 2, WORLD_SIZE / 2));

    // At zoom 1: 2×2 tiles, the center pixel belongs to (1, 1)
    let tile = tile_address_of(pixel, 1);
    assert_eq!((tile.x, tile.y), (1, 1));
}

#[test]
fn test_default_session_center() {
    let pixel = geo_to_world_pixel(62.779147, 40.334442);
    assert_eq!(pixel, WorldPixel::new(82146633, 36811335));
    assert_eq!(tile_address_of(pixel, 15), TileAddress { x: 20055, y: 8987, zoom: 15 });
}

#[test]
fn test_tile_size_at_each_end_of_range() {
    assert_eq!(tile_size_at(19), 256);
    assert_eq!(tile_size_at(15), 4096);
    assert_eq!(tile_size_at(0), WORLD_SIZE);
}

#[test]
fn test_tile_size_clamps_zoom() {
    assert_eq!(tile_size_at(25), tile_size_at(MAX_ZOOM));
    assert_eq!(tile_address_of(WorldPixel::new(512, 512), 30).zoom, MAX_ZOOM);
}

#[test]
fn test_tile_address_is_stable_under_repeated_calls() {
    for &(lat, lon) in &[(84.9, 179.9), (-84.9, -179.9), (12.5, 45.25), (0.0, 0.0)] {
        for zoom in MIN_ZOOM..=MAX_ZOOM {
            let first = tile_address_of(geo_to_world_pixel(lat, lon), zoom);
            let second = tile_address_of(geo_to_world_pixel(lat, lon), zoom);
            assert_eq!(first, second);
            assert!(first.x < tiles_per_axis(zoom));
            assert!(first.y < tiles_per_axis(zoom));
        }
    }
}

#[test]
fn test_world_pixel_to_geo_roundtrip() {
    let original = GeoPosition::new(62.779147, 40.334442);
    let back = world_pixel_to_geo(geo_to_world_pixel(original.lat, original.lon));

    // One world pixel is well under a meter
    assert!((back.lat - original.lat).abs() < 1e-5);
    assert!((back.lon - original.lon).abs() < 1e-5);
}

#[test]
fn test_screen_to_world_pixel_scales_by_zoom() {
    let center = WorldPixel::new(1_000_000, 2_000_000);
    let view = ScreenPoint::new(360, 200);

    // At zoom 19 one screen pixel is one world pixel
    let p = screen_to_world_pixel(view, ScreenPoint::new(370, 190), center, 19);
    assert_eq!(p, WorldPixel::new(1_000_010, 1_999_990));

    // At zoom 15 one screen pixel is 16 world pixels
    let p = screen_to_world_pixel(view, ScreenPoint::new(370, 190), center, 15);
    assert_eq!(p, WorldPixel::new(1_000_160, 1_999_840));
}

#[test]
fn test_screen_to_world_pixel_clamps_to_world() {
    let center = WorldPixel::new(10, MAX_WORLD_PIXEL - 10);
    let p = screen_to_world_pixel(
        ScreenPoint::new(0, 0),
        ScreenPoint::new(-100, 100),
        center,
        19,
    );
    assert_eq!(p, WorldPixel::new(0, MAX_WORLD_PIXEL));
}

#[test]
fn test_tile_address_new_validates() {
    assert!(TileAddress::new(0, 0, 0).is_ok());
    assert_eq!(TileAddress::new(0, 0, 20), Err(CoordError::InvalidZoom(20)));
    assert!(matches!(
        TileAddress::new(2, 0, 1),
        Err(CoordError::TileOutOfRange { x: 2, y: 0, zoom: 1 })
    ));
}

#[test]
fn test_tile_contains_is_half_open() {
    let tile = TileAddress { x: 3, y: 5, zoom: 18 }; // size 512
    assert!(tile.contains(WorldPixel::new(1536, 2560)));
    assert!(tile.contains(WorldPixel::new(2047, 3071)));
    assert!(!tile.contains(WorldPixel::new(2048, 2560)));
    assert!(!tile.contains(WorldPixel::new(1535, 2560)));
}

#[test]
fn test_tile_offset_stays_in_world() {
    let tile = TileAddress { x: 0, y: 1, zoom: 1 };
    assert_eq!(tile.offset(1, -1), Some(TileAddress { x: 1, y: 0, zoom: 1 }));
    assert_eq!(tile.offset(-1, 0), None);
    assert_eq!(tile.offset(0, 1), None);
}

#[test]
fn test_coord_error_display() {
    assert_eq!(
        CoordError::InvalidZoom(22).to_string(),
        "Invalid zoom level: 22 (must be between 0 and 19)"
    );
}

#[test]
fn test_screen_rect_intersection() {
    let viewport = ScreenRect::new(0, 0, 720, 400);
    assert!(viewport.intersects(&ScreenRect::new(-255, -255, 256, 256)));
    assert!(!viewport.intersects(&ScreenRect::new(-256, 0, 256, 256)));
    assert!(!viewport.intersects(&ScreenRect::new(720, 0, 256, 256)));
    assert_eq!(viewport.center(), ScreenPoint::new(360, 200));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_tile_of_pixel_contains_it(
            x in 0u32..=MAX_WORLD_PIXEL,
            y in 0u32..=MAX_WORLD_PIXEL,
            zoom in MIN_ZOOM..=MAX_ZOOM,
        ) {
            let pixel = WorldPixel::new(x, y);
            let tile = tile_address_of(pixel, zoom);
            prop_assert!(tile.contains(pixel));
            prop_assert!(tile.x < tiles_per_axis(zoom));
            prop_assert!(tile.y < tiles_per_axis(zoom));
        }

        #[test]
        fn prop_geo_roundtrip_within_a_pixel(
            lat in -85.0f64..85.0f64,
            lon in -180.0f64..180.0f64,
        ) {
            let pixel = geo_to_world_pixel(lat, lon);
            let back = geo_to_world_pixel(
                world_pixel_to_geo(pixel).lat,
                world_pixel_to_geo(pixel).lon,
            );
            prop_assert!((back.x as i64 - pixel.x as i64).abs() <= 1);
            prop_assert!((back.y as i64 - pixel.y as i64).abs() <= 1);
        }
    }
}
