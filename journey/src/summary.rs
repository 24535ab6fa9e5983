//! Plain-text and JSON reports of an itinerary.

use std::io::{self, Write};

use gateroute_maps::Scenario;
use gateroute_route::{GridId, Itinerary};

fn grid_name(scenario: &Scenario, grid: GridId) -> String {
    match grid {
        GridId::World => "world".to_string(),
        GridId::SubArea(i) => scenario
            .sub_areas
            .get(i)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| grid.to_string()),
    }
}

/// Visiting order, one line per leg, then the total.
pub fn write_summary<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    itinerary: &Itinerary,
) -> io::Result<()> {
    let names: Vec<_> = itinerary
        .order
        .iter()
        .map(|&i| grid_name(scenario, GridId::SubArea(i)))
        .collect();
    writeln!(out, "order: {}", names.join(" -> "))?;

    for leg in &itinerary.legs {
        let (Some(from), Some(to)) = (leg.path.first(), leg.path.last()) else {
            continue;
        };
        writeln!(
            out,
            "  {:<12} {from} -> {to}: cost {}, {} steps",
            grid_name(scenario, leg.grid),
            leg.cost,
            leg.path.len() - 1
        )?;
    }
    writeln!(out, "final cost: {}", itinerary.total_cost())
}

/// The itinerary as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, itinerary: &Itinerary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, itinerary)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> (Scenario, Itinerary) {
        let s = Scenario::from_texts("8A00\n0007", &["3114"]).unwrap();
        let it = s.solve().unwrap();
        (s, it)
    }

    #[test]
    fn summary_lists_legs_and_total() {
        let (s, it) = solved();
        let mut buf = Vec::new();
        write_summary(&mut buf, &s, &it).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "order: dungeon 1");
        assert_eq!(lines.len(), 1 + 4 + 1);
        assert!(lines[2].contains("dungeon 1"));
        assert!(lines[2].contains("(0, 0) -> (3, 0): cost 20, 3 steps"));
        // start -> A is free, dungeon 20 + 20, A -> 7 crosses two grass cells.
        assert_eq!(it.total_cost(), 60);
        assert_eq!(lines[5], "final cost: 60");
    }

    #[test]
    fn json_round_trips() {
        let (_, it) = solved();
        let mut buf = Vec::new();
        write_json(&mut buf, &it).unwrap();
        let back: Itinerary = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, it);
    }
}
