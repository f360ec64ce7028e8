//! Interchange annotation.
//!
//! Reduces a stop sequence to way-points and marks where the traveller
//! changes line. The first and last stops are always kept. An interior
//! stop served by more than one line, whose previous and next stops are on
//! different line sets, is an interchange: it is emitted together with the
//! following stop as one way-point and the following stop is skipped.

use crate::domain::{AnnotatedRoute, Route, Waypoint};

/// Annotate a route with its interchanges.
pub fn annotate(route: &Route) -> AnnotatedRoute {
    let stops = &route.stops;
    let mut waypoints = Vec::with_capacity(stops.len());
    let mut interchanges = 0;

    if let Some(first) = stops.first() {
        waypoints.push(Waypoint::Stop(first.clone()));
    }

    if stops.len() > 1 {
        let last = stops.len() - 1;
        let mut last_consumed = false;
        let mut i = 1;

        while i < last {
            let stop = &stops[i];
            let (prev, next) = (&stops[i - 1], &stops[i + 1]);

            if stop.is_multi_line() && !prev.same_lines(next) {
                waypoints.push(Waypoint::Interchange {
                    at: stop.clone(),
                    next: next.clone(),
                });
                interchanges += 1;
                last_consumed = i + 1 == last;
                i += 2;
            } else {
                waypoints.push(Waypoint::Stop(stop.clone()));
                i += 1;
            }
        }

        if !last_consumed {
            waypoints.push(Waypoint::Stop(stops[last].clone()));
        }
    }

    AnnotatedRoute {
        waypoints,
        interchanges,
        total_cost: route.cost,
        mode: route.mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CostMode, Station};

    fn route(ids: &[&str], cost: u64) -> Route {
        let stops = ids.iter().map(|s| Station::parse(s).unwrap()).collect();
        Route::new(stops, cost, CostMode::Distance)
    }

    fn rendered(annotated: &AnnotatedRoute) -> Vec<String> {
        annotated.waypoints.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_line_route_has_no_interchanges() {
        let r = route(
            &[
                "Noida_Sector_62~B",
                "Botanical_Garden~B",
                "Yamuna_Bank~B",
                "Vaishali~B",
            ],
            26,
        );
        let annotated = annotate(&r);

        assert_eq!(annotated.interchanges, 0);
        assert_eq!(annotated.waypoints.len(), 4);
        assert_eq!(annotated.total_cost, 26);
        assert!(annotated.stations().eq(r.stops.iter()));
    }

    #[test]
    fn interchange_pairs_with_following_stop() {
        let r = route(
            &[
                "Yamuna_Bank~B",
                "Rajiv_Chowk~BY",
                "AIIMS~Y",
                "Saket~Y",
                "Huda_City_Center~Y",
            ],
            34,
        );
        let annotated = annotate(&r);

        assert_eq!(annotated.interchanges, 1);
        assert_eq!(
            rendered(&annotated),
            [
                "Yamuna_Bank~B",
                "Rajiv_Chowk~BY ==> AIIMS~Y",
                "Saket~Y",
                "Huda_City_Center~Y",
            ]
        );
        assert!(annotated.stations().eq(r.stops.iter()));
    }

    #[test]
    fn multi_line_stop_without_change_is_plain() {
        // Blue on both sides of Rajiv Chowk
        let r = route(&["Yamuna_Bank~B", "Rajiv_Chowk~BY", "Moti_Nagar~B"], 15);
        let annotated = annotate(&r);

        assert_eq!(annotated.interchanges, 0);
        assert_eq!(annotated.waypoints.len(), 3);
        assert!(annotated.waypoints.iter().all(|w| !w.is_interchange()));
    }

    #[test]
    fn interchange_into_destination_is_not_repeated() {
        let r = route(&["Yamuna_Bank~B", "Rajiv_Chowk~BY", "New_Delhi~YO"], 7);
        let annotated = annotate(&r);

        assert_eq!(annotated.interchanges, 1);
        assert_eq!(
            rendered(&annotated),
            ["Yamuna_Bank~B", "Rajiv_Chowk~BY ==> New_Delhi~OY"]
        );
        assert!(annotated.stations().eq(r.stops.iter()));
    }

    #[test]
    fn consecutive_interchanges() {
        // B -> (BY) -> Y -> (YO) -> O
        let r = route(
            &[
                "Yamuna_Bank~B",
                "Rajiv_Chowk~BY",
                "AIIMS~Y",
                "New_Delhi~YO",
                "Shivaji_Stadium~O",
                "DDS_Campus~O",
            ],
            0,
        );
        let annotated = annotate(&r);

        // Rajiv Chowk consumes AIIMS; New Delhi then compares AIIMS (Y) with Shivaji (O)
        assert_eq!(annotated.interchanges, 2);
        assert_eq!(annotated.waypoints.len(), 4);
        assert!(annotated.stations().eq(r.stops.iter()));
    }

    #[test]
    fn endpoints_never_become_interchanges() {
        let r = route(&["Rajiv_Chowk~BY", "New_Delhi~YO"], 1);
        let annotated = annotate(&r);

        assert_eq!(annotated.interchanges, 0);
        assert_eq!(rendered(&annotated), ["Rajiv_Chowk~BY", "New_Delhi~OY"]);
    }

    #[test]
    fn single_stop_route() {
        let r = route(&["Saket~Y"], 0);
        let annotated = annotate(&r);

        assert_eq!(rendered(&annotated), ["Saket~Y"]);
        assert_eq!(annotated.station_count(), 0);
    }

    #[test]
    fn empty_route() {
        let r = Route::new(Vec::new(), 0, CostMode::Time);
        let annotated = annotate(&r);

        assert!(annotated.waypoints.is_empty());
        assert_eq!(annotated.interchanges, 0);
        assert_eq!(annotated.mode, CostMode::Time);
    }
}
