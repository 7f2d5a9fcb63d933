use std::{path::PathBuf, time::Duration};

use alloy::primitives::{Address, B256, U256};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use doma_core::{
    AuctionGateway, AuctionId, AuctionSummary, AuctionView, BatchAuctionDraft,
    HybridAuctionClient, ListFilter, ListQuery, PremiumAuctionClient, PremiumAuctionDraft, Quote,
    SortKey, TokenId, TxReceipt, units::TimeBase, watch::DEFAULT_POLL_INTERVAL,
};
use rust_decimal::Decimal;
use tracing::Level;

use doma_cli::{
    commands::{
        bet,
        bid::{self, BidInput, BidOutcome},
        create, list, offline,
        offline::{BidSize, CurveInput},
        status::{self as status_cmd, StatusReport},
        watch::{self as watch_cmd, WatchOptions},
    },
    config::{AuctionConfig, ConfigOverrides, DEFAULT_CONFIG_PATH, load_config, resolve_config_path},
    display::{self, QuoteReport, ReceiptReport, SummaryReport},
    wallet::{configured_address, connect_wallet, read_provider},
};

#[derive(Debug, Parser)]
#[command(name = "doma", about = "Dutch auction calculator and client for Doma domains", version)]
struct Cli {
    /// Path to the auction configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "FILE", global = true)]
    config: PathBuf,

    /// RPC URL of the Doma chain (overrides [chain].rpc_url)
    #[arg(long, env = "DOMA_RPC_URL", value_name = "URL", global = true)]
    rpc_url: Option<String>,

    /// Signing key (overrides [wallet].private_key and PRIVATE_KEY)
    #[arg(long, value_name = "KEY", global = true)]
    private_key: Option<String>,

    /// More logging; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Print machine-readable JSON where supported
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Project an auction described on the command line
    Preview(PreviewArgs),

    /// Quote a hard or soft bid against a curve described on the command line
    Quote(QuoteArgs),

    /// Classify a final price into its betting category
    Categorize(CategorizeArgs),

    /// Read and project an on-chain auction
    Status(AuctionArgs),

    /// Repaint an on-chain auction every poll tick until Ctrl-C
    Watch(WatchArgs),

    /// List on-chain auctions, filtered and sorted
    List(ListArgs),

    /// Place a bid on an on-chain auction
    #[command(subcommand)]
    Bid(BidCommand),

    /// Commit or reveal a premium auction bet
    #[command(subcommand)]
    Bet(BetCommand),

    /// Create a new auction
    #[command(subcommand)]
    Create(CreateCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Per {
    Second,
    Minute,
    Hour,
    Block,
}

#[derive(Debug, Args)]
struct CurveArgs {
    #[arg(long, value_name = "AMOUNT")]
    start_price: Decimal,
    #[arg(long, value_name = "AMOUNT")]
    reserve_price: Decimal,
    /// Price drop per `--per` unit
    #[arg(long, value_name = "AMOUNT")]
    decrement: Decimal,
    #[arg(long, value_enum, default_value = "second")]
    per: Per,
    /// Block time used with `--per block`
    #[arg(long, default_value_t = doma_core::units::DEFAULT_BLOCK_TIME_SECS)]
    block_time: u64,
    /// Auction length in seconds
    #[arg(long, value_name = "SECS")]
    duration: u64,
    /// Units in the bundle
    #[arg(long, default_value_t = 1)]
    units: u64,
    #[arg(long, default_value_t = 0)]
    filled: u64,
    /// Seconds since the auction started
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    elapsed: u64,
}

#[derive(Debug, Args)]
struct PreviewArgs {
    #[command(flatten)]
    curve: CurveArgs,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("size").required(true).args(["buy", "fraction"])))]
struct SizeArgs {
    /// Number of units to buy
    #[arg(long, value_name = "N")]
    buy: Option<u64>,
    /// Share of the bundle to buy, in percent (rounded down)
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100))]
    fraction: Option<u8>,
}

#[derive(Debug, Args)]
struct QuoteArgs {
    #[command(flatten)]
    curve: CurveArgs,
    #[command(flatten)]
    size: SizeArgs,
    /// Make it a soft bid that converts at this price
    #[arg(long, value_name = "AMOUNT")]
    threshold: Option<Decimal>,
}

#[derive(Debug, Args)]
struct CategorizeArgs {
    #[arg(long, value_name = "AMOUNT")]
    final_price: Decimal,
    #[arg(long, value_name = "AMOUNT")]
    high: Decimal,
    #[arg(long, value_name = "AMOUNT")]
    low: Decimal,
    /// The auction never cleared
    #[arg(long)]
    uncleared: bool,
}

#[derive(Debug, Args)]
struct AuctionArgs {
    /// Auction id (decimal or 0x-prefixed hex)
    #[arg(long, value_name = "ID")]
    auction: String,
    /// Target the premium auction contract
    #[arg(long)]
    premium: bool,
}

#[derive(Debug, Args)]
struct WatchArgs {
    #[command(flatten)]
    target: AuctionArgs,
    /// Poll interval in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    interval: u64,
    /// Stop once the auction is sold or ended
    #[arg(long)]
    until_end: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortBy {
    /// Least time left first
    Time,
    /// Cheapest first
    Price,
    /// Most filled first
    Filled,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// List the premium auction contract
    #[arg(long)]
    premium: bool,
    /// Only auctions that are running
    #[arg(long, conflicts_with = "ending")]
    active: bool,
    /// Only running auctions with an hour or less left
    #[arg(long)]
    ending: bool,
    #[arg(long, value_enum, default_value = "time")]
    sort: SortBy,
    /// Seller address or a fragment of it
    #[arg(long, value_name = "ADDR", conflicts_with = "mine")]
    seller: Option<String>,
    /// Only auctions created by the configured wallet
    #[arg(long)]
    mine: bool,
}

#[derive(Debug, Subcommand)]
enum BidCommand {
    /// Buy now at the current price
    Hard(HardBidArgs),
    /// Reserve units that convert once the price reaches a threshold
    Soft(SoftBidArgs),
}

#[derive(Debug, Args)]
struct HardBidArgs {
    #[command(flatten)]
    target: AuctionArgs,
    /// Units to buy (hybrid auctions only)
    #[arg(long, value_name = "N")]
    buy: Option<u64>,
    /// Share of the bundle to buy, in percent (hybrid auctions only)
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100), conflicts_with = "buy")]
    fraction: Option<u8>,
    /// Validate and quote without sending
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct SoftBidArgs {
    #[arg(long, value_name = "ID")]
    auction: String,
    #[command(flatten)]
    size: SizeArgs,
    #[arg(long, value_name = "AMOUNT")]
    threshold: Decimal,
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
enum BetCommand {
    /// Commit a hidden bet during the commit window
    Commit {
        #[arg(long, value_name = "ID")]
        auction: String,
        /// Commitment hash (bytes32)
        #[arg(long, value_name = "HASH")]
        hash: B256,
        #[arg(long, value_name = "AMOUNT")]
        amount: Decimal,
    },
    /// Reveal a committed bet during the reveal window
    Reveal {
        #[arg(long, value_name = "ID")]
        auction: String,
        /// Category 1, 2 or 3
        #[arg(long)]
        choice: u8,
        #[arg(long, value_name = "AMOUNT")]
        amount: Decimal,
        /// Secret used for the commitment (decimal or 0x-prefixed hex)
        #[arg(long, value_name = "SECRET")]
        secret: String,
    },
    /// Settle the betting pool after the reveal window
    Settle {
        #[arg(long, value_name = "ID")]
        auction: String,
    },
}

#[derive(Debug, Subcommand)]
enum CreateCommand {
    /// Batch auction over several domains
    Batch {
        /// Comma-separated token ids
        #[arg(long, value_delimiter = ',', required = true)]
        tokens: Vec<String>,
        #[arg(long, value_name = "AMOUNT")]
        start_price: Decimal,
        #[arg(long, value_name = "AMOUNT")]
        reserve_price: Decimal,
        /// Price drop per minute
        #[arg(long, value_name = "AMOUNT")]
        decrement: Decimal,
        #[arg(long, value_name = "MINUTES", default_value_t = 300)]
        duration_minutes: u64,
        #[arg(long, value_name = "BPS", default_value_t = 200)]
        reward_budget_bps: u64,
        /// 0 disables the reverse royalty
        #[arg(long, value_name = "BPS", default_value_t = 50)]
        royalty_increment_bps: u64,
        /// Zero address pays in the native currency
        #[arg(long, value_name = "ADDRESS", default_value_t = Address::ZERO)]
        payment_token: Address,
    },
    /// Single-domain premium auction, optionally with betting
    Premium {
        #[arg(long, value_name = "ID")]
        token: String,
        #[arg(long, value_name = "AMOUNT")]
        start_price: Decimal,
        #[arg(long, value_name = "AMOUNT")]
        reserve_price: Decimal,
        /// Price drop per minute
        #[arg(long, value_name = "AMOUNT")]
        decrement: Decimal,
        #[arg(long, value_name = "HOURS", default_value_t = 24)]
        duration_hours: u64,
        #[arg(long, value_name = "AMOUNT", requires = "low")]
        high: Option<Decimal>,
        #[arg(long, value_name = "AMOUNT", requires = "high")]
        low: Option<Decimal>,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let overrides = ConfigOverrides {
        rpc_url: cli.rpc_url.clone(),
        private_key: cli.private_key.clone(),
    };

    let load = || load_config(resolve_config_path(&cli.config));

    match cli.command {
        Commands::Preview(args) => handle_preview(args, cli.json)?,
        Commands::Quote(args) => handle_quote(args, cli.json)?,
        Commands::Categorize(args) => handle_categorize(args, cli.json)?,
        Commands::Status(args) => handle_status(args, &load()?, &overrides, cli.json).await?,
        Commands::Watch(args) => handle_watch(args, &load()?, &overrides, cli.json).await?,
        Commands::List(args) => handle_list(args, &load()?, &overrides, cli.json).await?,
        Commands::Bid(command) => handle_bid(command, &load()?, &overrides, cli.json).await?,
        Commands::Bet(command) => handle_bet(command, &load()?, &overrides, cli.json).await?,
        Commands::Create(command) => handle_create(command, &load()?, &overrides, cli.json).await?,
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_status(
    args: AuctionArgs,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let id = parse_auction_id(&args.auction)?;
    let provider = read_provider(config, overrides).await?;

    let report = if args.premium {
        status_cmd::premium_status(provider, config, config.premium_auction()?, id).await?
    } else {
        status_cmd::hybrid_status(provider, config, id).await?
    };
    print_status(&report, json)
}

async fn handle_watch(
    args: WatchArgs,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let id = parse_auction_id(&args.target.auction)?;
    let provider = read_provider(config, overrides).await?;
    let options = WatchOptions {
        interval: Duration::from_secs(args.interval.max(1)),
        until_end: args.until_end,
    };
    let render = move |view: &AuctionView| print_view(view, json);

    if args.target.premium {
        let client =
            PremiumAuctionClient::new(provider, config.premium_auction()?, config.units.premium());
        watch_cmd::watch(client, id, options, render).await;
    } else {
        let client = HybridAuctionClient::new(
            provider,
            config.contracts.hybrid_auction,
            config.units.hybrid(),
        );
        watch_cmd::watch(client, id, options, render).await;
    }
    Ok(())
}

async fn handle_list(
    args: ListArgs,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let seller = if args.mine {
        Some(configured_address(config, overrides)?.to_string())
    } else {
        args.seller
    };
    let query = ListQuery {
        filter: match (args.active, args.ending) {
            (_, true) => ListFilter::EndingSoon,
            (true, false) => ListFilter::Active,
            (false, false) => ListFilter::All,
        },
        sort: match args.sort {
            SortBy::Time => SortKey::TimeLeft,
            SortBy::Price => SortKey::CurrentPrice,
            SortBy::Filled => SortKey::FillPercentage,
        },
        seller,
    };

    let provider = read_provider(config, overrides).await?;
    let summaries = if args.premium {
        let client =
            PremiumAuctionClient::new(provider, config.premium_auction()?, config.units.premium());
        list::list(&client, &query).await?
    } else {
        let client = HybridAuctionClient::new(
            provider,
            config.contracts.hybrid_auction,
            config.units.hybrid(),
        );
        list::list(&client, &query).await?
    };

    print_summaries(&summaries, json)
}

fn curve_input(args: &CurveArgs) -> CurveInput {
    let decrement_per = match args.per {
        Per::Second => TimeBase::Seconds,
        Per::Minute => TimeBase::Minutes,
        Per::Hour => TimeBase::Hours,
        Per::Block => TimeBase::Blocks {
            block_time: args.block_time,
        },
    };

    CurveInput {
        start_price: args.start_price,
        reserve_price: args.reserve_price,
        price_decrement: args.decrement,
        decrement_per,
        duration_secs: args.duration,
        unit_count: args.units,
        filled_units: args.filled,
        elapsed_secs: args.elapsed,
    }
}

fn bid_size(args: &SizeArgs) -> eyre::Result<BidSize> {
    match (args.buy, args.fraction) {
        (Some(units), _) => Ok(BidSize::Units(units)),
        (None, Some(percent)) => Ok(BidSize::Percent(percent)),
        (None, None) => Err(eyre::eyre!("pass --buy or --fraction")),
    }
}

fn handle_preview(args: PreviewArgs, json: bool) -> eyre::Result<()> {
    let view = offline::preview(&curve_input(&args.curve))?;
    print_view(&view, json);
    Ok(())
}

fn handle_quote(args: QuoteArgs, json: bool) -> eyre::Result<()> {
    let output = offline::quote_bid(&curve_input(&args.curve), bid_size(&args.size)?, args.threshold)?;

    if json {
        let report = QuoteReport::from(&output.quote)
            .with_threshold_timing(output.threshold_after_secs, output.threshold_within_duration);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_quote(&output.quote);
    if let (Some(after), Some(within)) = (output.threshold_after_secs, output.threshold_within_duration)
    {
        let note = if within { "" } else { " (after the auction ends)" };
        println!("  threshold reached after {}s{note}", after.round_dp(2).normalize());
    }
    Ok(())
}

fn handle_categorize(args: CategorizeArgs, json: bool) -> eyre::Result<()> {
    let category = offline::categorize(args.final_price, args.high, args.low, !args.uncleared)?;

    if json {
        println!("{}", serde_json::json!({ "category": category.code() }));
    } else {
        println!("{}", display::category_label(category));
    }
    Ok(())
}

async fn handle_bid(
    command: BidCommand,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let (dry_run, premium) = match &command {
        BidCommand::Hard(args) => (args.dry_run, args.target.premium),
        BidCommand::Soft(args) => (args.dry_run, false),
    };

    // Dry runs only read, so they work without a key.
    let (provider, _wallet) = if dry_run {
        (read_provider(config, overrides).await?, None)
    } else {
        let wallet = connect_wallet(config, overrides).await?;
        (wallet.provider().clone(), Some(wallet))
    };
    let confirmation = config.wallet.confirmation();

    let outcome = match command {
        BidCommand::Hard(args) if premium => {
            if args.buy.is_some_and(|units| units != 1) || args.fraction.is_some() {
                eyre::bail!("premium auctions sell a single domain; omit --buy/--fraction");
            }
            let client =
                PremiumAuctionClient::new(provider, config.premium_auction()?, config.units.premium())
                    .with_confirmation(confirmation);
            bid::bid_premium(&client, parse_auction_id(&args.target.auction)?, dry_run).await?
        }
        BidCommand::Hard(args) => {
            let size = bid_size(&SizeArgs {
                buy: args.buy,
                fraction: args.fraction,
            })?;
            let client = HybridAuctionClient::new(
                provider,
                config.contracts.hybrid_auction,
                config.units.hybrid(),
            )
            .with_confirmation(confirmation);
            let input = BidInput {
                id: parse_auction_id(&args.target.auction)?,
                size,
                threshold: None,
                dry_run,
            };
            bid::bid_hybrid(&client, input).await?
        }
        BidCommand::Soft(args) => {
            let client = HybridAuctionClient::new(
                provider,
                config.contracts.hybrid_auction,
                config.units.hybrid(),
            )
            .with_confirmation(confirmation);
            let input = BidInput {
                id: parse_auction_id(&args.auction)?,
                size: bid_size(&args.size)?,
                threshold: Some(args.threshold),
                dry_run,
            };
            bid::bid_hybrid(&client, input).await?
        }
    };

    if json {
        let value = match &outcome {
            BidOutcome::Quoted(quote) => serde_json::json!({
                "quote": QuoteReport::from(quote),
                "dry_run": true,
            }),
            BidOutcome::Placed(placed) => serde_json::json!({
                "quote": QuoteReport::from(&placed.quote),
                "receipt": ReceiptReport::from(&placed.receipt),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match outcome {
        BidOutcome::Quoted(quote) => {
            print_quote(&quote);
            println!("dry run: nothing was sent");
        }
        BidOutcome::Placed(placed) => {
            print_quote(&placed.quote);
            print_receipt(&placed.receipt, false)?;
        }
    }
    Ok(())
}

async fn handle_bet(
    command: BetCommand,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let wallet = connect_wallet(config, overrides).await?;
    let client = PremiumAuctionClient::new(
        wallet.provider().clone(),
        config.premium_auction()?,
        config.units.premium(),
    )
    .with_confirmation(config.wallet.confirmation());

    let receipt = match command {
        BetCommand::Commit {
            auction,
            hash,
            amount,
        } => bet::commit(&client, parse_auction_id(&auction)?, hash, amount).await?,
        BetCommand::Reveal {
            auction,
            choice,
            amount,
            secret,
        } => {
            let secret = parse_u256(&secret)?;
            bet::reveal(&client, parse_auction_id(&auction)?, choice, amount, secret).await?
        }
        BetCommand::Settle { auction } => {
            let tx = client.settle_betting(parse_auction_id(&auction)?).await?;
            client.await_confirmation(tx).await?
        }
    };

    print_receipt(&receipt, json)
}

async fn handle_create(
    command: CreateCommand,
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
    json: bool,
) -> eyre::Result<()> {
    let wallet = connect_wallet(config, overrides).await?;

    let created = match command {
        CreateCommand::Batch {
            tokens,
            start_price,
            reserve_price,
            decrement,
            duration_minutes,
            reward_budget_bps,
            royalty_increment_bps,
            payment_token,
        } => {
            let token_ids = tokens
                .iter()
                .map(|raw| parse_u256(raw.trim()).map(TokenId::new))
                .collect::<eyre::Result<Vec<_>>>()?;
            let draft = BatchAuctionDraft {
                token_ids,
                start_price,
                reserve_price,
                price_decrement: decrement,
                duration_minutes,
                reward_budget_bps,
                royalty_increment_bps,
                payment_token,
            };
            if !json {
                println!(
                    "bundle value: {} at start, {} at reserve",
                    display::amount(draft.bundle_start_value()),
                    display::amount(draft.bundle_reserve_value())
                );
            }
            create::create_batch(&wallet, config, &draft).await?
        }
        CreateCommand::Premium {
            token,
            start_price,
            reserve_price,
            decrement,
            duration_hours,
            high,
            low,
        } => {
            let draft = PremiumAuctionDraft {
                token_id: TokenId::new(parse_u256(&token)?),
                start_price,
                reserve_price,
                price_decrement: decrement,
                duration_hours,
                betting: high.zip(low),
            };
            create::create_premium(&wallet, config, config.premium_auction()?, &draft).await?
        }
    };

    if json {
        let value = serde_json::json!({
            "receipt": ReceiptReport::from(&created.receipt),
            "auction_count": created.auction_count,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_receipt(&created.receipt, false)?;
    println!("auction counter: {}", created.auction_count);
    Ok(())
}

fn print_view(view: &AuctionView, json: bool) {
    if json {
        match serde_json::to_string(&display::ViewReport::from(view)) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::error!(%err, "failed to encode view"),
        }
    } else {
        println!("{}\n", display::render_view(view));
    }
}

fn print_status(report: &StatusReport, json: bool) -> eyre::Result<()> {
    if json {
        let value = serde_json::json!({
            "auction": report.id.to_string(),
            "view": display::ViewReport::from(&report.view),
            "domains": report.tokens.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            "royalty_percent": report.royalty_percent,
            "betting": report.betting.as_ref().map(|b| serde_json::json!({
                "high_price": b.thresholds.high_price(),
                "low_price": b.thresholds.low_price(),
                "total_pool": b.pool.total_pool,
                "phase": display::betting_phase_label(b.phase),
                "category": b.category.code(),
            })),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("auction #{}", report.id);
    for token in &report.tokens {
        println!("  {}", token.name);
    }
    println!("{}", display::render_view(&report.view));
    if let Some(royalty) = report.royalty_percent {
        println!("royalty:         {}", display::percent(royalty));
    }
    if let Some(betting) = &report.betting {
        println!(
            "betting:         {} (pool {}, band {} - {})",
            display::betting_phase_label(betting.phase),
            display::amount(betting.pool.total_pool),
            display::amount(betting.thresholds.low_price()),
            display::amount(betting.thresholds.high_price()),
        );
        println!("outcome:         {}", display::category_label(betting.category));
    }
    Ok(())
}

fn print_summaries(summaries: &[AuctionSummary], json: bool) -> eyre::Result<()> {
    if json {
        let reports: Vec<SummaryReport> = summaries.iter().map(SummaryReport::from).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("no auctions match");
    }
    for summary in summaries {
        println!("{}", display::render_summary(summary));
    }
    Ok(())
}

fn print_quote(quote: &Quote) {
    match quote {
        Quote::Hard(q) => println!("{}", display::render_hard_quote(q)),
        Quote::Soft(q) => println!("{}", display::render_soft_quote(q)),
    }
}

fn print_receipt(receipt: &TxReceipt, json: bool) -> eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&ReceiptReport::from(receipt))?);
    } else {
        println!(
            "confirmed {} in block {} (gas {})",
            receipt.tx_hash,
            receipt
                .block_number
                .map_or_else(|| "?".to_string(), |b| b.to_string()),
            receipt.gas_used
        );
    }
    Ok(())
}

fn parse_auction_id(s: &str) -> eyre::Result<AuctionId> {
    Ok(AuctionId::new(parse_u256(s)?))
}

fn parse_u256(s: &str) -> eyre::Result<U256> {
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(U256::from_str_radix(stripped, 16)?)
    } else {
        Ok(U256::from_str_radix(s, 10)?)
    }
}
