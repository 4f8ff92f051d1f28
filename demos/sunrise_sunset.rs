//! Sunrise, sunset and twilight times across diverse global locations.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use solar_events::{EventKind, SolarCalculator, SolarResult, ZenithLevel};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Test cities from around the world (diverse latitudes and longitudes)
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset_hours: 1,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            utc_offset_hours: -9,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            utc_offset_hours: 13,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            utc_offset_hours: 8,
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            utc_offset_hours: -3,
        },
    ];

    // Calculate for winter solstice - this shows the most extreme variations
    let date = NaiveDate::from_ymd_opt(2023, 12, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        println!("Date: December 21, 2023 (Winter Solstice)");
        println!();

        let calculator = SolarCalculator::new(date, city.latitude, city.longitude)?;
        let offset = FixedOffset::east_opt(city.utc_offset_hours * 3600)
            .ok_or("invalid UTC offset")?;
        print_result(&calculator.calculate(), &offset);
        println!(
            "Daytime at 12:00 UTC: {}",
            if calculator.is_daytime() { "yes" } else { "no" }
        );
        println!();
    }

    Ok(())
}

fn print_result(result: &SolarResult, offset: &FixedOffset) {
    for zenith in ZenithLevel::ALL {
        let label = match zenith {
            ZenithLevel::Official => "Sunrise/Sunset",
            ZenithLevel::Civil => "Civil Twilight",
            ZenithLevel::Nautical => "Nautical Twilight",
            ZenithLevel::Astronomical => "Astronomical Twilight",
        };
        println!("{label} (sun at {:.2}°):", zenith.elevation_angle());
        println!(
            "  Begin: {}",
            format_instant(result.event(EventKind::Sunrise, zenith), offset)
        );
        println!(
            "  End: {}",
            format_instant(result.event(EventKind::Sunset, zenith), offset)
        );
    }

    if let Some(length) = result.day_length() {
        println!(
            "Day length: {}h {:02}m",
            length.num_hours(),
            length.num_minutes() % 60
        );
    }
}

fn format_instant(instant: Option<DateTime<Utc>>, offset: &FixedOffset) -> String {
    instant.map_or_else(
        || "does not occur".to_string(),
        |instant| {
            format!(
                "{} ({})",
                instant.format("%Y-%m-%d %H:%M:%S UTC"),
                instant.with_timezone(offset).format("%H:%M local")
            )
        },
    )
}
