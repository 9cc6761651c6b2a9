// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

pub(crate) mod cli;

use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variant_fixtures::{DataFusionEngine, FixtureFile, Generator};

#[tokio::main]
#[allow(clippy::expect_used, clippy::unwrap_used)]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "variantgen=debug,variant_fixtures=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = cli::VariantGenOpts::parse();
    let engine = Arc::new(DataFusionEngine::new());
    let generator = Generator::new(engine);

    tracing::info!(
        "Regenerating variant fixtures in {}",
        opts.fixture_file.display()
    );
    match generator.run().await {
        Err(e) => {
            tracing::error!("Failed to generate variant fixtures: {:?}", e);
            std::process::exit(1);
        }
        Ok(generated) => {
            if let Err(e) = FixtureFile::new(opts.fixture_file).rewrite(&generated) {
                tracing::error!("Failed to rewrite fixture file: {:?}", e);
                std::process::exit(1);
            }
        }
    }
}
