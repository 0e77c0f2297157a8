//! Loads features from a GeoJSON file and replays pointer events over them.
//!
//! ```text
//! cargo run --example locate -- assets.geojson 80.6338,7.2937 80.7,7.3
//! ```
//!
//! Each coordinate is given as `lon,lat`. The program prints what a map would do for a pointer moved to the
//! coordinate and then clicked there.

use anyhow::{anyhow, Context};
use assetmap::assetmap_types::geo::{GeoPoint2d, NewGeoPoint};
use assetmap::control::{HoverChange, Interaction, InteractionHandler, PointerEvent};
use assetmap::{load_features, Feature, FeatureLocator, LocatorOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow!("usage: locate <features.geojson> <lon,lat>..."))?;
    let options = match std::env::var("ASSETMAP_LOCATOR") {
        Ok(json) => LocatorOptions::from_json(&json)?,
        Err(_) => LocatorOptions::default(),
    };

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let features = load_features(&text)?;
    log::info!("Loaded {} features from {path}", features.len());

    let mut handler = InteractionHandler::new(FeatureLocator::new(options));
    for arg in args {
        let position = parse_position(&arg)?;

        match handler.handle(&PointerEvent::Moved(position), &features) {
            Interaction::Hover(HoverChange::Unchanged) => println!("{position}: hover unchanged"),
            Interaction::Hover(change) => println!("{position}: {change:?}"),
            Interaction::OpenReport(_) => {}
        }

        if let Interaction::OpenReport(request) =
            handler.handle(&PointerEvent::Clicked(position), &features)
        {
            let name = request.place_name(&features).unwrap_or("<new place>");
            let kind = request
                .feature
                .and_then(|index| features.get(index))
                .map(|feature| format!("{:?}", feature.geometry().kind()))
                .unwrap_or_else(|| "no feature".to_string());
            println!("  report at {}: {name} ({kind})", request.location_label());
        }
    }

    Ok(())
}

fn parse_position(arg: &str) -> anyhow::Result<GeoPoint2d> {
    let (lon, lat) = arg
        .split_once(',')
        .ok_or_else(|| anyhow!("expected lon,lat but got {arg}"))?;
    Ok(GeoPoint2d::lonlat(
        lon.trim().parse().context("invalid longitude")?,
        lat.trim().parse().context("invalid latitude")?,
    ))
}
