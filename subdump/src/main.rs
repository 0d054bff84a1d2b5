/*
 * SPDX-License-Identifier: MPL-2.0
 */

use clap::{app_from_crate, crate_authors, crate_description, crate_name, crate_version, Arg};
use std::error::Error;
use std::path::Path;
use std::process::exit;
use sub::{factory::reader_for, FontSize, VerticalPosition};

fn main() {

    let matches = app_from_crate!()
        .arg(Arg::with_name("input")
            .index(1)
            .value_name("INPUT-FILE")
            .help("Input subtitle file")
            .required(true)
        )
        .after_help("This utility will dump normalized subtitle data from any supported \
            subtitle file.")
        .get_matches();
    let input = matches.value_of("input").unwrap();

    let reader = match reader_for(Path::new(input)) {
        Ok(Some(reader)) => reader,
        Ok(None) => {
            eprintln!("Unrecognized subtitle format: {}", input);
            exit(1);
        }
        Err(error) => {
            eprintln!("Could not read {}: {}", input, error);
            let mut source = error.source();
            while let Some(inner) = source {
                eprintln!("  caused by: {}", inner);
                source = inner.source();
            }
            exit(1);
        }
    };

    let subtitles = reader.subtitles();

    eprintln!("Read {} subtitles...", subtitles.len());

    for subtitle in subtitles {
        println!("subtitle({} --> {})", subtitle.from, subtitle.to);
        match subtitle.vertical_position {
            VerticalPosition::Lines { line, lines } => {
                println!("  position = line {} of {}", line, lines);
            }
            VerticalPosition::Proportional { proportion, reference } => {
                println!("  position = {:.3} from {:?}", proportion, reference);
            }
        }
        for block in &subtitle.blocks {
            println!("  block");
            for run in &block.runs {
                let mut flags = String::new();
                if run.bold {
                    flags.push_str(" bold");
                }
                if run.italic {
                    flags.push_str(" italic");
                }
                if run.underline {
                    flags.push_str(" underline");
                }
                println!(
                    "    run {:?} font = {}, size = {}{}",
                    run.text,
                    run.font.as_deref().unwrap_or("unspecified"),
                    match run.font_size {
                        FontSize::Points(points) => format!("{}pt", points),
                        FontSize::Proportional(proportion) =>
                            format!("{:.3} of screen height", proportion),
                    },
                    flags,
                );
            }
        }
    }
}
