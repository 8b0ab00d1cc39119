use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Nautical miles per ground unit.
pub const NM_PER_GROUND_UNIT: f64 = 0.01;
/// Cruise speed used for route duration estimates (kt).
pub const ROUTE_CRUISE_SPEED: f64 = 450.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    /// Designator, e.g. "09L/27R".
    pub designator: String,
    /// Length (ft).
    pub length: f64,
    /// Width (ft).
    pub width: f64,
    /// Heading of the departure end (degrees, clockwise from north).
    pub heading: f64,
    /// Threshold offset from the airport reference point (ground units).
    pub offset: Vector2<f64>,
}

impl Runway {
    fn new(designator: &str, length: f64, width: f64, heading: f64, dx: f64, dy: f64) -> Self {
        Self {
            designator: designator.to_string(),
            length,
            width,
            heading,
            offset: Vector2::new(dx, dy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code.
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Reference point in ground units (x east, y north).
    pub position: Vector2<f64>,
    /// Field elevation (ft above sea level). Informational; flight altitudes are AGL.
    pub elevation: f64,
    pub runways: Vec<Runway>,
}

impl Airport {
    /// The longest runway.
    pub fn primary_runway(&self) -> Option<&Runway> {
        self.runways
            .iter()
            .max_by(|a, b| a.length.total_cmp(&b.length))
    }

    pub fn runway(&self, designator: &str) -> Option<&Runway> {
        self.runways
            .iter()
            .find(|runway| runway.designator.eq_ignore_ascii_case(designator))
    }

    pub fn runway_start_position(&self, runway: &Runway) -> Vector2<f64> {
        self.position + runway.offset
    }

    /// Great-circle stand-in: straight-line distance in nautical miles.
    pub fn distance_to(&self, other: &Airport) -> f64 {
        (other.position - self.position).norm() * NM_PER_GROUND_UNIT
    }

    /// Initial bearing to `other` in degrees `[0, 360)`, 0 = north.
    pub fn bearing_to(&self, other: &Airport) -> f64 {
        let delta = other.position - self.position;
        let bearing = delta.x.atan2(delta.y).to_degrees().rem_euclid(360.0);
        if bearing >= 360.0 {
            0.0
        } else {
            bearing
        }
    }
}

/// The modeled airports. JFK sits at the ground origin.
pub fn builtin_airports() -> Vec<Airport> {
    vec![
        Airport {
            code: "JFK".to_string(),
            name: "John F. Kennedy International Airport".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
            position: Vector2::new(0.0, 0.0),
            elevation: 13.0,
            runways: vec![
                Runway::new("04L/22R", 12079.0, 200.0, 40.0, -100.0, 0.0),
                Runway::new("04R/22L", 11351.0, 200.0, 40.0, 100.0, 0.0),
                Runway::new("08L/26R", 10000.0, 150.0, 80.0, 0.0, 100.0),
                Runway::new("08R/26L", 8400.0, 150.0, 80.0, 0.0, -100.0),
            ],
        },
        Airport {
            code: "LAX".to_string(),
            name: "Los Angeles International Airport".to_string(),
            city: "Los Angeles".to_string(),
            country: "United States".to_string(),
            position: Vector2::new(-3000.0, -800.0),
            elevation: 125.0,
            runways: vec![
                Runway::new("06L/24R", 10885.0, 200.0, 60.0, -80.0, 0.0),
                Runway::new("06R/24L", 8926.0, 200.0, 60.0, 80.0, 0.0),
                Runway::new("07L/25R", 12091.0, 200.0, 70.0, 0.0, 90.0),
                Runway::new("07R/25L", 11095.0, 200.0, 70.0, 0.0, -90.0),
            ],
        },
        Airport {
            code: "LHR".to_string(),
            name: "London Heathrow Airport".to_string(),
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            position: Vector2::new(4000.0, 500.0),
            elevation: 83.0,
            runways: vec![
                Runway::new("09L/27R", 12799.0, 164.0, 90.0, -100.0, 0.0),
                Runway::new("09R/27L", 12008.0, 164.0, 90.0, 100.0, 0.0),
            ],
        },
        Airport {
            code: "CDG".to_string(),
            name: "Charles de Gaulle Airport".to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            position: Vector2::new(4200.0, -200.0),
            elevation: 392.0,
            runways: vec![
                Runway::new("08L/26R", 13123.0, 197.0, 80.0, -120.0, 0.0),
                Runway::new("08R/26L", 13780.0, 197.0, 80.0, 120.0, 0.0),
                Runway::new("09/27", 8858.0, 197.0, 90.0, 0.0, 150.0),
                Runway::new("10/28", 9843.0, 197.0, 100.0, 0.0, -150.0),
            ],
        },
        Airport {
            code: "NRT".to_string(),
            name: "Narita International Airport".to_string(),
            city: "Tokyo".to_string(),
            country: "Japan".to_string(),
            position: Vector2::new(8000.0, -1000.0),
            elevation: 135.0,
            runways: vec![
                Runway::new("16L/34R", 13123.0, 197.0, 160.0, -100.0, 0.0),
                Runway::new("16R/34L", 8202.0, 197.0, 160.0, 100.0, 0.0),
            ],
        },
    ]
}

/// Finds a built-in airport by IATA code, ignoring case.
pub fn find_airport(code: &str) -> Option<Airport> {
    builtin_airports()
        .into_iter()
        .find(|airport| airport.code.eq_ignore_ascii_case(code.trim()))
}

/// Straight-line route between two airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub departure: String,
    pub arrival: String,
    /// Distance (nm).
    pub distance: f64,
    /// Estimated flight time at cruise speed (hours).
    pub duration: f64,
    /// Initial bearing from departure to arrival (degrees).
    pub bearing: f64,
    pub waypoints: Vec<Vector2<f64>>,
}

impl Route {
    pub fn between(departure: &Airport, arrival: &Airport) -> Self {
        let distance = departure.distance_to(arrival);
        Self {
            departure: departure.code.clone(),
            arrival: arrival.code.clone(),
            distance,
            duration: distance / ROUTE_CRUISE_SPEED,
            bearing: departure.bearing_to(arrival),
            waypoints: vec![departure.position, arrival.position],
        }
    }

    /// Every route between distinct built-in airports, both directions.
    pub fn all() -> Vec<Route> {
        let airports = builtin_airports();
        let mut routes = Vec::with_capacity(airports.len() * (airports.len() - 1));
        for departure in &airports {
            for arrival in airports.iter().filter(|a| a.code != departure.code) {
                routes.push(Route::between(departure, arrival));
            }
        }
        routes
    }

    /// Arrival codes reachable from `departure`.
    pub fn destinations(departure: &str) -> Vec<String> {
        Self::all()
            .into_iter()
            .filter(|route| route.departure.eq_ignore_ascii_case(departure))
            .map(|route| route.arrival)
            .collect()
    }
}
