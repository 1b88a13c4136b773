use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::utc_offset_minutes;

/// One pickable zone in the timeline editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub static TIMEZONES: &[TimezoneEntry] = &[
    TimezoneEntry { id: "Africa/Abidjan", label: "Abidjan, Ivory Coast" },
    TimezoneEntry { id: "Africa/Accra", label: "Accra, Ghana" },
    TimezoneEntry { id: "Africa/Addis_Ababa", label: "Addis Ababa, Ethiopia" },
    TimezoneEntry { id: "Africa/Algiers", label: "Algiers, Algeria" },
    TimezoneEntry { id: "Africa/Cairo", label: "Cairo, Egypt" },
    TimezoneEntry { id: "Africa/Casablanca", label: "Casablanca, Morocco" },
    TimezoneEntry { id: "Africa/Dar_es_Salaam", label: "Dar es Salaam, Tanzania" },
    TimezoneEntry { id: "Africa/Johannesburg", label: "Johannesburg, South Africa" },
    TimezoneEntry { id: "Africa/Khartoum", label: "Khartoum, Sudan" },
    TimezoneEntry { id: "Africa/Lagos", label: "Lagos, Nigeria" },
    TimezoneEntry { id: "Africa/Nairobi", label: "Nairobi, Kenya" },
    TimezoneEntry { id: "Africa/Tunis", label: "Tunis, Tunisia" },
    TimezoneEntry { id: "America/Anchorage", label: "Anchorage, USA (Alaska)" },
    TimezoneEntry { id: "America/Chicago", label: "Chicago, USA (Central)" },
    TimezoneEntry { id: "America/Denver", label: "Denver, USA (Mountain)" },
    TimezoneEntry { id: "America/Detroit", label: "Detroit, USA (Eastern)" },
    TimezoneEntry { id: "America/Edmonton", label: "Edmonton, Canada (Mountain)" },
    TimezoneEntry { id: "America/Halifax", label: "Halifax, Canada (Atlantic)" },
    TimezoneEntry { id: "Pacific/Honolulu", label: "Honolulu, USA (Hawaii)" },
    TimezoneEntry { id: "America/Los_Angeles", label: "Los Angeles, USA (Pacific)" },
    TimezoneEntry { id: "America/Mexico_City", label: "Mexico City, Mexico" },
    TimezoneEntry { id: "America/New_York", label: "New York, USA (Eastern)" },
    TimezoneEntry { id: "America/Phoenix", label: "Phoenix, USA (Arizona)" },
    TimezoneEntry { id: "America/St_Johns", label: "St. Johns, Canada (Newfoundland)" },
    TimezoneEntry { id: "America/Toronto", label: "Toronto, Canada (Eastern)" },
    TimezoneEntry { id: "America/Vancouver", label: "Vancouver, Canada (Pacific)" },
    TimezoneEntry { id: "America/Winnipeg", label: "Winnipeg, Canada (Central)" },
    TimezoneEntry { id: "America/Costa_Rica", label: "Costa Rica" },
    TimezoneEntry { id: "America/Guatemala", label: "Guatemala" },
    TimezoneEntry { id: "America/Havana", label: "Havana, Cuba" },
    TimezoneEntry { id: "America/Jamaica", label: "Jamaica" },
    TimezoneEntry { id: "America/Panama", label: "Panama" },
    TimezoneEntry { id: "America/Puerto_Rico", label: "Puerto Rico" },
    TimezoneEntry { id: "America/Santo_Domingo", label: "Santo Domingo, Dominican Republic" },
    TimezoneEntry { id: "America/Argentina/Buenos_Aires", label: "Buenos Aires, Argentina" },
    TimezoneEntry { id: "America/Bogota", label: "Bogota, Colombia" },
    TimezoneEntry { id: "America/Caracas", label: "Caracas, Venezuela" },
    TimezoneEntry { id: "America/La_Paz", label: "La Paz, Bolivia" },
    TimezoneEntry { id: "America/Lima", label: "Lima, Peru" },
    TimezoneEntry { id: "America/Montevideo", label: "Montevideo, Uruguay" },
    TimezoneEntry { id: "America/Santiago", label: "Santiago, Chile" },
    TimezoneEntry { id: "America/Sao_Paulo", label: "São Paulo, Brazil" },
    TimezoneEntry { id: "Asia/Hong_Kong", label: "Hong Kong" },
    TimezoneEntry { id: "Asia/Macau", label: "Macau" },
    TimezoneEntry { id: "Asia/Seoul", label: "Seoul, South Korea" },
    TimezoneEntry { id: "Asia/Shanghai", label: "Shanghai, China" },
    TimezoneEntry { id: "Asia/Taipei", label: "Taipei, Taiwan" },
    TimezoneEntry { id: "Asia/Tokyo", label: "Tokyo, Japan" },
    TimezoneEntry { id: "Asia/Ulaanbaatar", label: "Ulaanbaatar, Mongolia" },
    TimezoneEntry { id: "Asia/Bangkok", label: "Bangkok, Thailand" },
    TimezoneEntry { id: "Asia/Ho_Chi_Minh", label: "Ho Chi Minh City, Vietnam" },
    TimezoneEntry { id: "Asia/Jakarta", label: "Jakarta, Indonesia" },
    TimezoneEntry { id: "Asia/Kuala_Lumpur", label: "Kuala Lumpur, Malaysia" },
    TimezoneEntry { id: "Asia/Manila", label: "Manila, Philippines" },
    TimezoneEntry { id: "Asia/Singapore", label: "Singapore" },
    TimezoneEntry { id: "Asia/Colombo", label: "Colombo, Sri Lanka" },
    TimezoneEntry { id: "Asia/Dhaka", label: "Dhaka, Bangladesh" },
    TimezoneEntry { id: "Asia/Karachi", label: "Karachi, Pakistan" },
    TimezoneEntry { id: "Asia/Kathmandu", label: "Kathmandu, Nepal" },
    TimezoneEntry { id: "Asia/Kolkata", label: "Kolkata/Mumbai, India" },
    TimezoneEntry { id: "Asia/Almaty", label: "Almaty, Kazakhstan" },
    TimezoneEntry { id: "Asia/Tashkent", label: "Tashkent, Uzbekistan" },
    TimezoneEntry { id: "Asia/Amman", label: "Amman, Jordan" },
    TimezoneEntry { id: "Asia/Baghdad", label: "Baghdad, Iraq" },
    TimezoneEntry { id: "Asia/Bahrain", label: "Bahrain" },
    TimezoneEntry { id: "Asia/Beirut", label: "Beirut, Lebanon" },
    TimezoneEntry { id: "Asia/Damascus", label: "Damascus, Syria" },
    TimezoneEntry { id: "Asia/Dubai", label: "Dubai, UAE" },
    TimezoneEntry { id: "Asia/Jerusalem", label: "Jerusalem, Israel" },
    TimezoneEntry { id: "Asia/Kuwait", label: "Kuwait" },
    TimezoneEntry { id: "Asia/Muscat", label: "Muscat, Oman" },
    TimezoneEntry { id: "Asia/Qatar", label: "Qatar" },
    TimezoneEntry { id: "Asia/Riyadh", label: "Riyadh, Saudi Arabia" },
    TimezoneEntry { id: "Asia/Tehran", label: "Tehran, Iran" },
    TimezoneEntry { id: "Australia/Adelaide", label: "Adelaide, Australia" },
    TimezoneEntry { id: "Australia/Brisbane", label: "Brisbane, Australia" },
    TimezoneEntry { id: "Australia/Darwin", label: "Darwin, Australia" },
    TimezoneEntry { id: "Australia/Hobart", label: "Hobart, Australia" },
    TimezoneEntry { id: "Australia/Melbourne", label: "Melbourne, Australia" },
    TimezoneEntry { id: "Australia/Perth", label: "Perth, Australia" },
    TimezoneEntry { id: "Australia/Sydney", label: "Sydney, Australia" },
    TimezoneEntry { id: "Pacific/Auckland", label: "Auckland, New Zealand" },
    TimezoneEntry { id: "Pacific/Fiji", label: "Fiji" },
    TimezoneEntry { id: "Pacific/Guam", label: "Guam" },
    TimezoneEntry { id: "Pacific/Noumea", label: "Noumea, New Caledonia" },
    TimezoneEntry { id: "Pacific/Port_Moresby", label: "Port Moresby, Papua New Guinea" },
    TimezoneEntry { id: "Pacific/Tahiti", label: "Tahiti, French Polynesia" },
    TimezoneEntry { id: "Atlantic/Reykjavik", label: "Reykjavik, Iceland" },
    TimezoneEntry { id: "Europe/Dublin", label: "Dublin, Ireland" },
    TimezoneEntry { id: "Europe/Lisbon", label: "Lisbon, Portugal" },
    TimezoneEntry { id: "Europe/London", label: "London, UK" },
    TimezoneEntry { id: "Europe/Amsterdam", label: "Amsterdam, Netherlands" },
    TimezoneEntry { id: "Europe/Berlin", label: "Berlin, Germany" },
    TimezoneEntry { id: "Europe/Brussels", label: "Brussels, Belgium" },
    TimezoneEntry { id: "Europe/Budapest", label: "Budapest, Hungary" },
    TimezoneEntry { id: "Europe/Copenhagen", label: "Copenhagen, Denmark" },
    TimezoneEntry { id: "Europe/Madrid", label: "Madrid, Spain" },
    TimezoneEntry { id: "Europe/Oslo", label: "Oslo, Norway" },
    TimezoneEntry { id: "Europe/Paris", label: "Paris, France" },
    TimezoneEntry { id: "Europe/Prague", label: "Prague, Czech Republic" },
    TimezoneEntry { id: "Europe/Rome", label: "Rome, Italy" },
    TimezoneEntry { id: "Europe/Stockholm", label: "Stockholm, Sweden" },
    TimezoneEntry { id: "Europe/Vienna", label: "Vienna, Austria" },
    TimezoneEntry { id: "Europe/Warsaw", label: "Warsaw, Poland" },
    TimezoneEntry { id: "Europe/Zurich", label: "Zurich, Switzerland" },
    TimezoneEntry { id: "Europe/Athens", label: "Athens, Greece" },
    TimezoneEntry { id: "Europe/Bucharest", label: "Bucharest, Romania" },
    TimezoneEntry { id: "Europe/Helsinki", label: "Helsinki, Finland" },
    TimezoneEntry { id: "Europe/Istanbul", label: "Istanbul, Turkey" },
    TimezoneEntry { id: "Europe/Kiev", label: "Kyiv, Ukraine" },
    TimezoneEntry { id: "Europe/Moscow", label: "Moscow, Russia" },
    TimezoneEntry { id: "Europe/Riga", label: "Riga, Latvia" },
    TimezoneEntry { id: "Europe/Sofia", label: "Sofia, Bulgaria" },
    TimezoneEntry { id: "Europe/Tallinn", label: "Tallinn, Estonia" },
    TimezoneEntry { id: "Europe/Vilnius", label: "Vilnius, Lithuania" },
    TimezoneEntry { id: "Atlantic/Azores", label: "Azores, Portugal" },
    TimezoneEntry { id: "Atlantic/Cape_Verde", label: "Cape Verde" },
    TimezoneEntry { id: "Indian/Maldives", label: "Maldives" },
    TimezoneEntry { id: "Indian/Mauritius", label: "Mauritius" },
];

/// Catalog entries whose current UTC offset is within a tenth of an hour of
/// `offset_hours`. `None` returns the whole catalog.
pub fn timezones_by_offset(
    instant: DateTime<Utc>,
    offset_hours: Option<f64>,
) -> Vec<TimezoneEntry> {
    let Some(target) = offset_hours.filter(|value| value.is_finite()) else {
        return TIMEZONES.to_vec();
    };

    TIMEZONES
        .iter()
        .filter(|entry| {
            let offset = f64::from(utc_offset_minutes(instant, entry.id)) / 60.0;
            (offset - target).abs() < 0.1
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::is_known_timezone;
    use chrono::TimeZone;

    #[test]
    fn every_catalog_entry_resolves() {
        for entry in TIMEZONES {
            assert!(is_known_timezone(entry.id), "{} is not a known zone", entry.id);
        }
    }

    #[test]
    fn filters_by_current_offset() {
        let january = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).single().unwrap();

        let plus_eleven: Vec<&str> = timezones_by_offset(january, Some(11.0))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert!(plus_eleven.contains(&"Australia/Sydney"));
        assert!(!plus_eleven.contains(&"Australia/Brisbane"));

        let india: Vec<&str> = timezones_by_offset(january, Some(5.5))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert!(india.contains(&"Asia/Kolkata"));
        assert!(india.contains(&"Asia/Colombo"));
        assert!(!india.contains(&"Asia/Kathmandu"));

        let hawaii: Vec<&str> = timezones_by_offset(january, Some(-10.0))
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(hawaii, vec!["Pacific/Honolulu", "Pacific/Tahiti"]);

        assert_eq!(timezones_by_offset(january, None).len(), TIMEZONES.len());
        assert_eq!(timezones_by_offset(january, Some(f64::NAN)).len(), TIMEZONES.len());
    }
}
