//! Locate command - show where a position lands in pixel and tile space.

use satview::config::ConfigFile;
use satview::coord::{
    geo_to_world_pixel, tile_address_of, tile_size_at, world_pixel_to_geo, CoordError, MAX_ZOOM,
};
use satview::provider::{AsyncReqwestClient, MapboxProvider};

use crate::error::CliError;

/// Arguments for the locate command.
pub struct LocateArgs {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

pub fn run(args: LocateArgs) -> Result<(), CliError> {
    check_position(args.lat, args.zoom)?;
    let config = ConfigFile::load()?;

    let pixel = geo_to_world_pixel(args.lat, args.lon);
    let tile = tile_address_of(pixel, args.zoom);
    let origin = tile.origin();

    let client = AsyncReqwestClient::new(None)?;
    let token = config
        .provider
        .access_token
        .clone()
        .unwrap_or_else(|| "<token>".to_string());
    let provider = MapboxProvider::new(client, token)
        .with_host(config.provider.host.clone())
        .with_tileset(config.provider.tileset.clone())
        .with_format(config.provider.format.clone());

    println!("Position:     {}, {}", args.lat, args.lon);
    println!("World pixel:  {}", pixel);
    println!("Tile:         {} (size {} world px)", tile, tile_size_at(args.zoom));
    println!(
        "Offset:       ({}, {}) inside tile",
        pixel.x - origin.x,
        pixel.y - origin.y
    );
    println!("Tile corner:  {}", world_pixel_to_geo(origin));
    println!("URL:          {}", provider.tile_url(tile));

    Ok(())
}

/// Rejects positions the projection cannot represent.
pub fn check_position(lat: f64, zoom: u8) -> Result<(), CliError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom).into());
    }
    if lat.is_nan() || lat.abs() >= 90.0 {
        return Err(CliError::Config(format!(
            "latitude {} is outside the Mercator range (-90, 90)",
            lat
        )));
    }
    Ok(())
}
