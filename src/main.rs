use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use butterworth_iir::config::{FilterConfig, FilterInstanceConfig};
use butterworth_iir::design::prototype::butterworth_order;
use butterworth_iir::logging::{init_logging, LogLevel};
use butterworth_iir::{create_online_filter, design, DiscreteTransferFunction, Edges};

/// Butterworth IIR designer and sample-stream filter
#[derive(Parser, Debug)]
#[command(name = "iir-design")]
#[command(about = "Design minimal-order Butterworth filters and run them over samples", long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Only design the filter with this name or index
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,

    /// Samples to filter, whitespace separated ("-" for stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Log verbosity (RUST_LOG overrides)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Resolve `--filter` to a filter index.
///
/// A numeric value is an index. Otherwise an exact (case-insensitive) name
/// wins over the first name containing the search text.
fn find_filter(filters: &[FilterInstanceConfig], search: &str) -> Result<usize> {
    if let Ok(index) = search.parse::<usize>() {
        return match filters.get(index) {
            Some(_) => Ok(index),
            None => Err(anyhow::anyhow!(
                "Filter index {} out of range ({} filters configured)",
                index,
                filters.len()
            )),
        };
    }

    let needle = search.to_lowercase();
    let names: Vec<String> = filters.iter().map(|f| f.name.to_lowercase()).collect();
    names
        .iter()
        .position(|name| *name == needle)
        .or_else(|| names.iter().position(|name| name.contains(&needle)))
        .ok_or_else(|| anyhow::anyhow!("Filter '{}' not found", search))
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    init_logging(args.log_level);

    let config = FilterConfig::load(&args.config)?;

    let selected: Vec<usize> = match &args.filter {
        Some(search) => vec![find_filter(&config.filters, search)?],
        None => (0..config.filters.len()).collect(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut designs = Vec::with_capacity(selected.len());
    for idx in selected {
        let filter = &config.filters[idx];
        let spec = filter.to_spec(config.sample_rate)?;
        let sampling_time = filter.sampling_time(config.sample_rate);
        let prototype = butterworth_order(&spec)?;
        let tf = design::butter(prototype.order, prototype.cutoff, spec.band(), sampling_time)
            .with_context(|| format!("Failed to design filter {} ({})", idx, filter.name))?;

        tracing::info!(filter = %filter.name, band = %spec.band(), order = tf.order(), "designed");
        designs.push((filter, prototype.cutoff, tf));
    }

    match &args.input {
        None => {
            for (filter, cutoff, tf) in &designs {
                print_design(&mut out, filter, cutoff, tf)?;
            }
        }
        Some(input) => {
            // Streaming needs exactly one filter
            let [(filter, _, tf)] = designs.as_slice() else {
                return Err(anyhow::anyhow!(
                    "--input needs a single filter; select one with --filter"
                ));
            };
            tracing::info!(filter = %filter.name, "filtering samples");
            run_stream(&mut out, input, tf.clone())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Print one design as a small readable block
fn print_design(
    out: &mut impl Write,
    filter: &FilterInstanceConfig,
    cutoff: &Edges,
    tf: &DiscreteTransferFunction,
) -> Result<()> {
    writeln!(out, "{} ({}, order {})", filter.name, filter.band, tf.order())?;
    writeln!(out, "  cutoff = {}", cutoff)?;
    writeln!(out, "  b = {:?}", tf.numerator())?;
    writeln!(out, "  a = {:?}", tf.denominator())?;
    Ok(())
}

/// Filter whitespace-separated samples, one output per line
fn run_stream(out: &mut impl Write, input: &Path, tf: DiscreteTransferFunction) -> Result<()> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read samples from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read samples: {}", input.display()))?
    };

    let mut filter = create_online_filter(tf);
    for (n, token) in text.split_whitespace().enumerate() {
        let sample: f64 = token
            .parse()
            .with_context(|| format!("Invalid sample {} at position {}", token, n))?;
        writeln!(out, "{}", filter.process_sample(sample))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> Vec<FilterInstanceConfig> {
        let yaml = r#"
filters:
  - name: "Rumble"
    type: highpass
    passband: 0.05
    stopband: 0.02
  - name: "Hiss"
    type: lowpass
    passband: 0.3
    stopband: 0.4
  - name: "Rum"
    type: lowpass
    passband: 0.1
    stopband: 0.2
"#;
        FilterConfig::from_yaml(yaml).unwrap().filters
    }

    #[test]
    fn test_find_filter_by_index_and_name() {
        let filters = filters();
        assert_eq!(find_filter(&filters, "1").unwrap(), 1);
        assert_eq!(find_filter(&filters, "rumb").unwrap(), 0);
        assert_eq!(find_filter(&filters, "HISS").unwrap(), 1);
        assert!(find_filter(&filters, "3").is_err());
        assert!(find_filter(&filters, "notch").is_err());
    }

    #[test]
    fn test_find_filter_prefers_exact_name() {
        let filters = filters();
        // "rum" is also a prefix of "Rumble", listed first
        assert_eq!(find_filter(&filters, "rum").unwrap(), 2);
        assert_eq!(find_filter(&filters, "ble").unwrap(), 0);
    }

    #[test]
    fn test_print_design() {
        let filters = filters();
        let tf = DiscreteTransferFunction::new(vec![0.5, 0.5], vec![1.0, 0.0]).unwrap();
        let mut buf = Vec::new();
        print_design(&mut buf, &filters[1], &Edges::Single(0.3), &tf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Hiss (lowpass, order 1)"));
        assert!(text.contains("cutoff = 0.3"));
        assert!(text.contains("b = [0.5, 0.5]"));
    }
}
