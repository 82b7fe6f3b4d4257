use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A shop pinned to a coordinate, as shown in the "nearby shops" panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A shop with its distance from the user, rounded to one decimal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedShop {
    #[serde(flatten)]
    pub shop: Shop,
    pub distance_km: f64,
}

/// Great-circle distance between two coordinates via the haversine formula.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Attaches the rounded distance from `origin` to every shop and sorts
/// ascending by it. The sort is stable, so equal rounded distances keep
/// their input order.
pub fn rank_by_distance(origin: Coordinates, shops: Vec<Shop>) -> Vec<RankedShop> {
    let mut ranked: Vec<RankedShop> = shops
        .into_iter()
        .map(|shop| {
            let to = Coordinates {
                lat: shop.lat,
                lng: shop.lng,
            };
            let distance_km = (haversine_km(origin, to) * 10.0).round() / 10.0;
            RankedShop { shop, distance_km }
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}
