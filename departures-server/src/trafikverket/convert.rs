//! Conversion from train announcements to the normalized shape.

use crate::domain::{Departure, or_unknown};

use super::types::TrainAnnouncement;

/// Normalize announcements into client-facing departures.
///
/// Pure function. Output order equals input order, which is the order the
/// provider returned the announcements in.
pub fn normalize_announcements(announcements: Vec<TrainAnnouncement>) -> Vec<Departure> {
    announcements.into_iter().map(normalize_one).collect()
}

fn normalize_one(ann: TrainAnnouncement) -> Departure {
    Departure {
        time: or_unknown(ann.advertised_time_at_location),
        destination: or_unknown(
            ann.to_location
                .into_iter()
                .next()
                .and_then(|l| l.location_name),
        ),
        transport_type: or_unknown(
            ann.product_information
                .into_iter()
                .next()
                .and_then(|p| p.description),
        ),
        route: or_unknown(ann.advertised_train_ident),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN;
    use crate::trafikverket::types::{LocationRef, ProductInformation};

    fn announcement(time: &str, ident: &str, dest: &str) -> TrainAnnouncement {
        TrainAnnouncement {
            advertised_time_at_location: Some(time.to_string()),
            advertised_train_ident: Some(ident.to_string()),
            to_location: vec![LocationRef {
                location_name: Some(dest.to_string()),
            }],
            product_information: vec![ProductInformation {
                description: Some("SL Pendeltåg".to_string()),
            }],
        }
    }

    #[test]
    fn maps_all_fields() {
        let departures =
            normalize_announcements(vec![announcement("2026-08-25T14:22:00", "8724", "U")]);

        assert_eq!(
            departures,
            vec![Departure {
                time: "2026-08-25T14:22:00".to_string(),
                destination: "U".to_string(),
                transport_type: "SL Pendeltåg".to_string(),
                route: "8724".to_string(),
            }]
        );
    }

    #[test]
    fn bare_announcement_becomes_all_unknown() {
        let departures = normalize_announcements(vec![TrainAnnouncement::default()]);

        assert_eq!(departures.len(), 1);
        assert_eq!(departures[0].time, UNKNOWN);
        assert_eq!(departures[0].destination, UNKNOWN);
        assert_eq!(departures[0].transport_type, UNKNOWN);
        assert_eq!(departures[0].route, UNKNOWN);
    }

    #[test]
    fn first_to_location_wins() {
        let mut ann = announcement("t", "1", "U");
        ann.to_location.push(LocationRef {
            location_name: Some("Cst".to_string()),
        });

        let departures = normalize_announcements(vec![ann]);
        assert_eq!(departures[0].destination, "U");
    }

    #[test]
    fn preserves_upstream_order() {
        let departures = normalize_announcements(vec![
            announcement("c", "3", "x"),
            announcement("a", "1", "y"),
            announcement("b", "2", "z"),
        ]);

        let routes: Vec<&str> = departures.iter().map(|d| d.route.as_str()).collect();
        assert_eq!(routes, vec!["3", "1", "2"]);
    }

    #[test]
    fn length_equals_input_count() {
        let input = vec![
            TrainAnnouncement::default(),
            announcement("t", "1", "U"),
            TrainAnnouncement::default(),
        ];
        assert_eq!(normalize_announcements(input).len(), 3);
    }
}
