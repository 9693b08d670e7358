#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use availability::config::WidgetConfig;
    use availability::controls::FilterKind;
    use availability::feed::{proxy_response, FeedClient, Unit, UNIT_PREFIX};
    use availability::view::{row_action, TableBody};
    use availability::widget::AvailabilityWidget;
    use clap::{Args, Parser, Subcommand};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[derive(Parser)]
    #[command(name = "availability")]
    #[command(about = "Apartment availability feed tool", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    /// Where units come from and which building context applies
    #[derive(Args)]
    struct Source {
        /// Widget config file (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Read the feed from a local JSON file instead of fetching it
        #[arg(short, long)]
        file: Option<String>,

        /// Building context (default: the configured building, if any)
        #[arg(short, long)]
        building: Option<String>,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Fetch and normalize the feed, printing the JSON array (or an error object)
        Proxy {
            /// Widget config file (TOML)
            #[arg(short, long)]
            config: Option<String>,

            /// Feed URL (overrides the configured one)
            #[arg(short, long)]
            url: Option<String>,
        },

        /// List available units, one page at a time
        List {
            #[command(flatten)]
            source: Source,

            /// Bedroom count or "all"
            #[arg(long, default_value = "all")]
            bedrooms: String,

            /// Bathroom count or "all"
            #[arg(long, default_value = "all")]
            bathrooms: String,

            /// Outdoor space (balcony, terrace, patio, none) or "all"
            #[arg(long, default_value = "all")]
            outdoor: String,

            #[arg(long)]
            min_price: Option<u32>,

            #[arg(long)]
            max_price: Option<u32>,

            /// Page number (1-based)
            #[arg(short, long, default_value_t = 1)]
            page: usize,

            /// Print the full view as JSON
            #[arg(long)]
            json: bool,
        },

        /// Show the detail view (or leased notice) of one unit
        Show {
            /// Unit id, with or without the "Unit " prefix (e.g. "4B")
            unit: String,

            #[command(flatten)]
            source: Source,
        },
    }

    fn init_logging() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    #[tokio::main]
    pub async fn run() {
        init_logging();
        let cli = Cli::parse();

        let result = match cli.command {
            Commands::Proxy { config, url } => proxy(config.as_deref(), url).await,
            Commands::List {
                source,
                bedrooms,
                bathrooms,
                outdoor,
                min_price,
                max_price,
                page,
                json,
            } => {
                let filters = ListFilters {
                    bedrooms,
                    bathrooms,
                    outdoor,
                    min_price,
                    max_price,
                    page,
                };
                list_units(&source, &filters, json).await
            }
            Commands::Show { unit, source } => show_unit(&source, &unit).await,
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    struct ListFilters {
        bedrooms: String,
        bathrooms: String,
        outdoor: String,
        min_price: Option<u32>,
        max_price: Option<u32>,
        page: usize,
    }

    fn load_config(path: Option<&str>) -> Result<WidgetConfig, Box<dyn std::error::Error>> {
        match path {
            Some(path) => Ok(WidgetConfig::load_from_file(path)?),
            None => Ok(WidgetConfig::default()),
        }
    }

    async fn load_widget(source: &Source) -> Result<AvailabilityWidget, Box<dyn std::error::Error>> {
        let config = load_config(source.config.as_deref())?;
        let feed_url = config.feed_url.clone();
        let mut widget = AvailabilityWidget::new(config);
        widget.initialize(source.building.as_deref());

        match &source.file {
            Some(path) => {
                let body = std::fs::read_to_string(path)?;
                widget.load_feed(&body)?;
            }
            None => {
                widget.refresh(&FeedClient::new(feed_url)).await?;
            }
        }
        Ok(widget)
    }

    async fn proxy(config: Option<&str>, url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
        let config = load_config(config)?;
        let client = FeedClient::new(url.unwrap_or(config.feed_url));

        let result = client.fetch_units().await;
        println!("{}", serde_json::to_string_pretty(&proxy_response(&result))?);

        result?;
        Ok(())
    }

    async fn list_units(
        source: &Source,
        filters: &ListFilters,
        json: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut widget = load_widget(source).await?;

        for (kind, value) in [
            (FilterKind::Bedrooms, &filters.bedrooms),
            (FilterKind::Bathrooms, &filters.bathrooms),
            (FilterKind::Outdoor, &filters.outdoor),
        ] {
            let current = widget.controls().dropdown(kind).selected_value();
            if !current.eq_ignore_ascii_case(value) && !widget.select_filter_value(kind, value)
            {
                return Err(format!("Unknown {:?} option '{}'", kind, value).into());
            }
        }
        if let Some(min) = filters.min_price {
            widget.set_min_price(min);
        }
        if let Some(max) = filters.max_price {
            widget.set_max_price(max);
        }
        if filters.page != 1 && !widget.go_to_page(filters.page) {
            return Err(format!("Page {} does not exist", filters.page).into());
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&widget.view())?);
            return Ok(());
        }

        let summary = widget.results_summary();
        let price = widget.controls_view().price;
        println!(
            "{} (price {} - {}, page {})",
            summary.text,
            price.min.text,
            price.max.text,
            widget.current_page()
        );

        match widget.table() {
            TableBody::Rows { rows } => {
                for row in rows {
                    println!(
                        "  - {} | {} | {} | {} | floor plan: {}",
                        row.id,
                        row.bed_bath,
                        if row.outdoor.is_empty() { "-" } else { row.outdoor.as_str() },
                        row.rent,
                        row.floor_plan.label
                    );
                }
            }
            TableBody::Loading { message }
            | TableBody::Failed { message }
            | TableBody::Empty { message } => println!("{}", message),
        }

        let pages: Vec<String> = widget
            .pagination_controls()
            .into_iter()
            .map(|c| if c.active { format!("[{}]", c.label) } else { c.label })
            .collect();
        if !pages.is_empty() {
            println!("\n{}", pages.join(" "));
        }

        Ok(())
    }

    fn same_unit(unit: &Unit, wanted: &str) -> bool {
        let wanted = wanted.trim();
        unit.id.eq_ignore_ascii_case(wanted)
            || unit
                .id
                .strip_prefix(UNIT_PREFIX)
                .is_some_and(|id| id.eq_ignore_ascii_case(wanted))
    }

    async fn show_unit(source: &Source, wanted: &str) -> Result<(), Box<dyn std::error::Error>> {
        let widget = load_widget(source).await?;

        let unit = widget
            .filtered_units()
            .into_iter()
            .find(|u| same_unit(u, wanted))
            .ok_or_else(|| format!("Unit '{}' not found", wanted))?;

        let action = row_action(unit, &widget.config().image_base);
        println!("{}", serde_json::to_string_pretty(&action)?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    cli::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
