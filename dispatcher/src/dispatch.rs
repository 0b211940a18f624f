use model::{Distance, Highway};
use solver::Direction;

use crate::command::Command;

/// Runs one parsed [`Command`] against the highway and returns the fixed
/// protocol response line.
pub fn execute(highway: &mut Highway, command: Command) -> String {
    match command {
        Command::AddStation { distance, fuels } => match highway.add_station(distance, fuels) {
            Ok(()) => "aggiunta".to_string(),
            Err(err) => {
                tracing::debug!(%err, distance, "add_station failed");
                "non aggiunta".to_string()
            }
        },
        Command::RemoveStation { distance } => match highway.remove_station(distance) {
            Ok(()) => "demolita".to_string(),
            Err(err) => {
                tracing::debug!(%err, distance, "remove_station failed");
                "non demolita".to_string()
            }
        },
        Command::AddCar { distance, fuel } => match highway.add_car(distance, fuel) {
            Ok(()) => "aggiunta".to_string(),
            Err(err) => {
                tracing::debug!(%err, distance, fuel, "add_car failed");
                "non aggiunta".to_string()
            }
        },
        Command::RemoveCar { distance, fuel } => match highway.remove_car(distance, fuel) {
            Ok(()) => "rottamata".to_string(),
            Err(err) => {
                tracing::debug!(%err, distance, fuel, "remove_car failed");
                "non rottamata".to_string()
            }
        },
        Command::PlanPath { a, b } => plan_path(highway, a, b),
    }
}

fn plan_path(highway: &Highway, a: Distance, b: Distance) -> String {
    let (lo, hi, direction) = if a <= b {
        (a, b, Direction::Forward)
    } else {
        (b, a, Direction::Backward)
    };

    let (distances, fuels) = match highway.extract_range(lo, hi) {
        Ok(pair) => pair,
        Err(err) => {
            tracing::debug!(%err, a, b, "extract_range failed");
            return "nessun percorso".to_string();
        }
    };

    match solver::solve(&distances, &fuels, direction) {
        Ok(path) => path
            .iter()
            .map(Distance::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        Err(err) => {
            tracing::debug!(%err, a, b, "solve failed");
            "nessun percorso".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Config;

    fn highway() -> Highway {
        Highway::new(&Config::default())
    }

    #[test]
    fn add_station_reports_aggiunta() {
        // ARRANGE
        let mut highway = highway();

        // ACT
        let reply = execute(
            &mut highway,
            Command::AddStation {
                distance: 10,
                fuels: vec![5],
            },
        );

        // ASSERT
        assert_eq!(reply, "aggiunta");
    }

    #[test]
    fn add_station_twice_reports_non_aggiunta() {
        let mut highway = highway();
        execute(
            &mut highway,
            Command::AddStation {
                distance: 10,
                fuels: vec![],
            },
        );
        let reply = execute(
            &mut highway,
            Command::AddStation {
                distance: 10,
                fuels: vec![],
            },
        );
        assert_eq!(reply, "non aggiunta");
    }

    #[test]
    fn remove_absent_station_reports_non_demolita() {
        let mut highway = highway();
        let reply = execute(&mut highway, Command::RemoveStation { distance: 3 });
        assert_eq!(reply, "non demolita");
    }

    #[test]
    fn plan_path_missing_endpoint_reports_nessun_percorso() {
        let mut highway = highway();
        execute(
            &mut highway,
            Command::AddStation {
                distance: 10,
                fuels: vec![],
            },
        );
        let reply = execute(&mut highway, Command::PlanPath { a: 10, b: 40 });
        assert_eq!(reply, "nessun percorso");
    }

    #[test]
    fn plan_path_self_path_is_a_single_station() {
        let mut highway = highway();
        execute(
            &mut highway,
            Command::AddStation {
                distance: 10,
                fuels: vec![],
            },
        );
        let reply = execute(&mut highway, Command::PlanPath { a: 10, b: 10 });
        assert_eq!(reply, "10");
    }

    #[test]
    fn plan_path_forward_joins_the_path_with_spaces() {
        // ARRANGE: 0(fuel 50) directly reaches 50
        let mut highway = highway();
        execute(
            &mut highway,
            Command::AddStation {
                distance: 0,
                fuels: vec![50],
            },
        );
        execute(
            &mut highway,
            Command::AddStation {
                distance: 50,
                fuels: vec![0],
            },
        );

        // ACT
        let reply = execute(&mut highway, Command::PlanPath { a: 0, b: 50 });

        // ASSERT
        assert_eq!(reply, "0 50");
    }

    #[test]
    fn plan_path_infers_backward_direction_from_argument_order() {
        // ARRANGE: 20(fuel 15) 30(fuel 40) 50(fuel 25); traveling 50 -> 20
        // needs the intermediate stop at 30 (50->30 gap 20 covered by
        // station 50's own fuel, 30->20 gap 10 covered by station 30's fuel)
        let mut highway = highway();
        execute(
            &mut highway,
            Command::AddStation {
                distance: 20,
                fuels: vec![15],
            },
        );
        execute(
            &mut highway,
            Command::AddStation {
                distance: 30,
                fuels: vec![40],
            },
        );
        execute(
            &mut highway,
            Command::AddStation {
                distance: 50,
                fuels: vec![25],
            },
        );

        // ACT
        let reply = execute(&mut highway, Command::PlanPath { a: 50, b: 20 });

        // ASSERT
        assert_eq!(reply, "50 30 20");
    }
}
