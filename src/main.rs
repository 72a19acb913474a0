//! Interactive route search over a distance table.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use waymap::{plan, AllPairs, PlaceId, Registry, RoadGraph};

/// Search shortest routes between the places of a distance table.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the CSV distance table (header line, then place,place,distance)
    dataset: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let records = waymap::dataset::load_path(&args.dataset)
        .with_context(|| format!("failed to load {}", args.dataset.display()))?;
    let graph = RoadGraph::from_records(records)?;
    let all_pairs = AllPairs::compute(graph.adjacency());
    let registry = Registry::new(graph.into_places(), all_pairs);

    run(&registry, &mut io::stdin().lock())?;

    println!("Thanks for using the software");
    Ok(())
}

fn run(registry: &Registry, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        println!("\nBegin the search!");

        let Some(start) = prompt_start(registry, input)? else {
            return Ok(());
        };
        let destinations = prompt_destinations(registry, input)?;

        match plan(registry, start, &destinations) {
            Ok(itinerary) => {
                println!("Your route is:");
                for &stop in &itinerary.stops {
                    // Every stop id comes from this registry.
                    let place = registry.place_by_id(stop).unwrap();
                    println!("     {}", place.name());
                }
                println!("Total distance = {}", itinerary.distance);
            }
            Err(disconnected) => println!("{disconnected}."),
        }
    }
}

/// Prompts for the starting place until a known one is entered.
///
/// Returns `None` when the user quits with `q` (or on end of input).
fn prompt_start(registry: &Registry, input: &mut impl BufRead) -> io::Result<Option<PlaceId>> {
    loop {
        let Some(line) = read_line("Enter starting place, enter 'q' to quit: ", input)? else {
            return Ok(None);
        };

        if line == "q" {
            return Ok(None);
        }

        match registry.place(&line) {
            Some(place) => return Ok(Some(place.id())),
            None => println!("This place is not in the list!"),
        }
    }
}

/// Prompts for destinations until `end` (or end of input).
///
/// An unknown place or a repetition of the previous destination is rejected
/// and prompted again.
fn prompt_destinations(
    registry: &Registry,
    input: &mut impl BufRead,
) -> io::Result<Vec<PlaceId>> {
    let mut destinations = Vec::new();
    let mut last: Option<PlaceId> = None;

    loop {
        let Some(line) = read_line("Enter next destination, enter \"end\" to exit: ", input)?
        else {
            return Ok(destinations);
        };

        if line == "end" {
            return Ok(destinations);
        }

        match registry.place(&line) {
            Some(place) if last != Some(place.id()) => {
                destinations.push(place.id());
                last = Some(place.id());
            }
            _ => println!(
                "This destination is not valid or is the same as the previous destination!"
            ),
        }
    }
}

/// Prints `prompt` and reads one trimmed line, or `None` on end of input.
fn read_line(prompt: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
