//! Conversion from Rejseplanen DTOs to domain types.

use crate::domain::{Leg, LegKind, LegStop, TripCandidate};

use super::types::{LegDto, StopDto, TripResponse};

/// Convert a decoded trip response into trip candidates, preserving order.
pub fn convert_trip_response(response: &TripResponse) -> Vec<TripCandidate> {
    response
        .trips
        .iter()
        .map(|trip| {
            TripCandidate::new(
                trip.leg_list
                    .legs
                    .as_slice()
                    .iter()
                    .map(convert_leg)
                    .collect(),
            )
        })
        .collect()
}

fn convert_leg(leg: &LegDto) -> Leg {
    Leg {
        kind: LegKind::from_tag(&leg.leg_type),
        origin: convert_stop(&leg.origin),
        destination: convert_stop(&leg.destination),
        line: leg
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    }
}

fn convert_stop(stop: &StopDto) -> LegStop {
    match stop.time.as_deref().map(str::trim) {
        Some(time) if !time.is_empty() => LegStop::new(stop.name.trim(), time),
        _ => LegStop::untimed(stop.name.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> TripResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_legs_in_order() {
        let response = decode(
            r#"{"Trip": [
                {"LegList": {"Leg": [
                    {"type": "WALK",
                     "Origin": {"name": "Home", "time": "08:00"},
                     "Destination": {"name": "Nørreport St.", "time": "08:09"}},
                    {"type": "JNY", "name": " Re 4512 ",
                     "Origin": {"name": "Nørreport St.", "time": "08:12:00"},
                     "Destination": {"name": "Hellerup St.", "time": "08:20:00"}}
                ]}},
                {"LegList": {"Leg": [
                    {"type": "JNY", "name": "",
                     "Origin": {"name": "Nørreport St.", "time": "08:22"},
                     "Destination": {"name": "Hellerup St.", "time": "08:30"}}
                ]}}
            ]}"#,
        );

        let trips = convert_trip_response(&response);
        assert_eq!(trips.len(), 2);

        let first = &trips[0];
        assert_eq!(first.legs[0].kind, LegKind::Walk);
        assert_eq!(first.legs[1].kind, LegKind::Journey);
        assert_eq!(first.legs[1].line.as_deref(), Some("Re 4512"));
        assert_eq!(first.legs[1].origin, LegStop::new("Nørreport St.", "08:12:00"));

        // Blank names are treated as missing.
        assert_eq!(trips[1].legs[0].line, None);
    }

    #[test]
    fn missing_or_blank_times_are_untimed() {
        let response = decode(
            r#"{"Trip": [{"LegList": {"Leg": [
                {"type": "WALK",
                 "Origin": {"name": "Nørreport", "time": " "},
                 "Destination": {"name": "Hellerup"}},
                {"type": "JNY", "name": "A"}
            ]}}]}"#,
        );

        let legs = &convert_trip_response(&response)[0].legs;
        assert_eq!(legs[0].origin, LegStop::untimed("Nørreport"));
        assert_eq!(legs[0].destination.time(), None);
        assert_eq!(legs[1].origin, LegStop::untimed(""));
    }

    #[test]
    fn empty_response_has_no_candidates() {
        assert!(convert_trip_response(&TripResponse::default()).is_empty());
        assert!(convert_trip_response(&decode(r#"{"Trip": []}"#)).is_empty());
    }

    #[test]
    fn trip_without_leg_list_is_empty() {
        let trips = convert_trip_response(&decode(r#"{"Trip": [{}]}"#));
        assert_eq!(trips, vec![TripCandidate::default()]);
    }
}
