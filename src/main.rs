/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use city_paths::city_graph;
use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;

/// Prints the shortest route between two locations of the city map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Label of the start location
    #[arg(long, default_value_t = 'Z')]
    from: char,

    /// Label of the destination
    #[arg(long, default_value_t = 'J')]
    to: char,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let graph = city_graph().wrap_err("failed to build the city map")?;
    info!(
        "city map has {} locations and {} roads",
        graph.num_nodes(),
        graph.num_edges()
    );

    let path = graph
        .shortest_path(&cli.from, &cli.to)
        .wrap_err_with(|| format!("cannot route from {} to {}", cli.from, cli.to))?;
    Ok(graph.report(&path).to_string())
}
