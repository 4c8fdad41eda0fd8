//! Console tables for results, standings and finishing probabilities.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::bracket::Bracket;
use crate::mc::Tally;
use crate::sim::Score;
use crate::team::Roster;
use crate::tournament::Standing;

fn header(cells: Vec<Cell>) -> Row {
    Row::new(Styles::default().with(Header(true)), cells)
}

fn col(min_width: usize, align: HAlign) -> Col {
    Col::new(Styles::default().with(MinWidth(min_width)).with(align))
}

pub fn tabulate_standings(standings: &[Standing], roster: &Roster) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            col(6, HAlign::Right),
            col(20, HAlign::Left),
            col(8, HAlign::Right),
            col(8, HAlign::Centred),
        ])
        .with_row(header(vec![
            "Place".into(),
            "Team".into(),
            "Rating".into(),
            "Record".into(),
        ]));
    for standing in standings {
        let (rating, record) = match roster.get(standing.team) {
            Ok(team) => (format!("{:.1}", team.rating()), team.record().to_string()),
            Err(_) => (String::new(), String::new()),
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", standing.place).into(),
                roster.name(standing.team).into(),
                rating.into(),
                record.into(),
            ],
        ));
    }
    table
}

pub fn tabulate_games(bracket: &Bracket, roster: &Roster) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            col(12, HAlign::Left),
            col(20, HAlign::Right),
            col(7, HAlign::Centred),
            col(20, HAlign::Left),
            col(11, HAlign::Centred),
            col(5, HAlign::Centred),
        ])
        .with_row(header(vec![
            "Game".into(),
            "Team A".into(),
            "Score".into(),
            "Team B".into(),
            "Expected".into(),
            "Upset".into(),
        ]));
    for (id, game) in bracket.iter() {
        let name = match (game.level(), game.label()) {
            (Some(level), "") => level.to_string(),
            (_, "") => id.to_string(),
            (_, label) => label.to_string(),
        };
        let cells: Vec<Cell> = match game.outcome() {
            Some(outcome) => vec![
                name.into(),
                roster.name(outcome.team_a).into(),
                outcome.score.to_string().into(),
                roster.name(outcome.team_b).into(),
                outcome.expected.to_string().into(),
                (if outcome.upset() { "*" } else { "" }).into(),
            ],
            None => vec![
                name.into(),
                "".into(),
                "-".into(),
                "".into(),
                "".into(),
                "".into(),
            ],
        };
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}

/// Finishing probabilities by seed, followed by the chance of taking a bid and the mean place.
pub fn tabulate_tally(tally: &Tally, roster: &Roster) -> Table {
    let places = tally.seeds().len();
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![col(5, HAlign::Right), col(20, HAlign::Left)];
            for _ in 0..places {
                cols.push(col(6, HAlign::Right));
            }
            cols.push(Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(8))
                    .with(HAlign::Right),
            ));
            cols.push(col(6, HAlign::Right));
            cols
        })
        .with_row({
            let mut header_cells = vec!["Seed".into(), "Team".into()];
            for place in 1..=places {
                header_cells.push(format!("P{place}").into());
            }
            header_cells.push("Bid".into());
            header_cells.push("Mean".into());
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });
    for (index, &team) in tally.seeds().iter().enumerate() {
        let mut row_cells = vec![format!("{}", index + 1).into(), roster.name(team).into()];
        for place in 1..=places {
            row_cells.push(format!("{:.3}", tally.finish_prob(index, place)).into());
        }
        row_cells.push(format!("{:.3}", tally.qualify_prob(index)).into());
        row_cells.push(format!("{:.2}", tally.mean_place(index)).into());
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

/// Running score after every point of a game.
pub fn tabulate_log(score: &Score, team_a: &str, team_b: &str) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            col(6, HAlign::Right),
            col(10, HAlign::Right),
            col(10, HAlign::Right),
        ])
        .with_row(header(vec!["Point".into(), team_a.into(), team_b.into()]));
    for (index, &(a, b)) in score.log().iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                format!("{a}").into(),
                format!("{b}").into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;
    use tinyrand::{Seeded, StdRand};

    use super::*;
    use crate::catalog::Format;
    use crate::config::Overrides;
    use crate::rating::Division;
    use crate::sim;
    use crate::testing;
    use crate::tournament::Tournament;

    #[test]
    fn standings_and_games() {
        let (mut roster, seeds) = testing::roster(4);
        let mut tournament =
            Tournament::from_format(Format::FourSingle, &seeds, &[], &Division::Men.config()).unwrap();
        let unplayed = Console::default()
            .render(&tabulate_games(tournament.bracket(), &roster))
            .to_string();
        assert!(unplayed.contains("final"), "{unplayed}");
        assert!(!unplayed.contains("Seed"), "{unplayed}");

        tournament
            .play(&mut roster, &Overrides::none(), &mut StdRand::seed(1))
            .unwrap();
        let standings = tournament.determine_placement().unwrap();
        let rendered = Console::default()
            .render(&tabulate_standings(&standings, &roster))
            .to_string();
        for team in ["Seed 1", "Seed 2", "Seed 3", "Seed 4"] {
            assert!(rendered.contains(team), "{rendered}");
        }

        let rendered = Console::default()
            .render(&tabulate_games(tournament.bracket(), &roster))
            .to_string();
        assert!(rendered.contains("semi1"), "{rendered}");
        assert!(rendered.contains("third"), "{rendered}");
    }

    #[test]
    fn point_log() {
        let score = sim::fixed(true, 5);
        let rendered = Console::default()
            .render(&tabulate_log(&score, "UCLA", "UCSB"))
            .to_string();
        assert!(rendered.contains("UCSB"), "{rendered}");
        assert_eq!(8, score.log().len());
    }

    #[test]
    fn tally_table() {
        let (mut roster, seeds) = testing::roster(5);
        let tally = crate::mc::tally(
            10,
            &mut roster,
            &seeds,
            2,
            &Division::Women.config(),
            &mut StdRand::seed(3),
        )
        .unwrap();
        let rendered = Console::default()
            .render(&tabulate_tally(&tally, &roster))
            .to_string();
        assert!(rendered.contains("P5"), "{rendered}");
        assert!(!rendered.contains("P6"), "{rendered}");
        assert!(rendered.contains("Seed 5"), "{rendered}");
        assert!(rendered.contains("Bid"), "{rendered}");
    }
}
