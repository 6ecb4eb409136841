use anyhow::Context;
use pnp_bricks::{QueueConfig, prompt, queue};
use pnp_chan::{Receiver, channel, spawn};
use pnp_config::{DemoConfig, Network};
use pnp_sinks::{console, convert_int_str, producer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path.as_str()).with_context(|| format!("loading {path}"))?,
        None => DemoConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(network = ?cfg.network, iterations = cfg.iterations, "launching network");

    let values = launch(&cfg)?;
    let (text_tx, text_rx) = channel();
    spawn("convert_int_str", move || convert_int_str(values, text_tx))?;

    console(text_rx, std::io::stdout().lock(), &cfg.console_title, cfg.iterations);
    tracing::info!("console finished, abandoning network");
    Ok(())
}

fn launch(cfg: &DemoConfig) -> anyhow::Result<Receiver<i64>> {
    let (out_tx, out_rx) = channel();
    match cfg.network {
        Network::Numbers => pnp_networks::numbers(out_tx, 0)?,
        Network::Integrate => {
            let (n_tx, n_rx) = channel();
            pnp_networks::numbers(n_tx, 0)?;
            pnp_networks::integrate(n_rx, out_tx)?;
        }
        Network::Squares => pnp_networks::squares(out_tx)?,
        Network::ReverseIntegrate => {
            let (n_tx, n_rx) = channel();
            let (i_tx, i_rx) = channel();
            pnp_networks::numbers(n_tx, 0)?;
            pnp_networks::integrate(n_rx, i_tx)?;
            pnp_networks::reverse_integrate(i_rx, out_tx)?;
        }
        Network::Fibonacci => pnp_networks::fibonacci(out_tx)?,
        Network::Queue => {
            let (put_tx, put_rx) = channel();
            let (get_tx, get_rx) = channel();
            let (reply_tx, reply_rx) = channel();
            let iterations = i64::try_from(cfg.iterations).context("iterations out of range")?;
            let queue_cfg = QueueConfig::new(cfg.queue_capacity);
            spawn("producer", move || producer(put_tx, iterations))?;
            spawn("queue", move || queue(put_rx, get_rx, reply_tx, queue_cfg))?;
            spawn("prompt", move || prompt(get_tx, reply_rx, out_tx))?;
        }
    }
    Ok(out_rx)
}
