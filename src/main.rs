use log::{debug, error};
use std::env;
use std::fs;

use recipe_scaler::{RecipeScaler, ScaleError, ScalerConfig};

const USAGE: &str = "Usage: recipe-scaler <FILE> <TARGET_PORTIONS> [--base N] [--json]";

struct Args {
    path: String,
    target: u32,
    base: Option<u32>,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut base = None;
    let mut json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--base" => {
                let value = iter.next().ok_or("--base needs a value")?;
                base = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid base portions: {}", value))?,
                );
            }
            _ => positional.push(arg.clone()),
        }
    }

    let [path, target] = positional.as_slice() else {
        return Err(USAGE.to_string());
    };
    let target = target
        .parse::<u32>()
        .map_err(|_| format!("Invalid target portions: {}", target))?;

    Ok(Args {
        path: path.clone(),
        target,
        base,
        json,
    })
}

fn looks_like_html(path: &str, content: &str) -> bool {
    path.ends_with(".html") || path.ends_with(".htm") || content.trim_start().starts_with('<')
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let config = ScalerConfig::load()?;
    let content = fs::read_to_string(&args.path).map_err(ScaleError::from)?;

    let mut builder = RecipeScaler::builder()
        .config(config)
        .target_portions(args.target);
    builder = if looks_like_html(&args.path, &content) {
        debug!("Reading {} as HTML", args.path);
        builder.html(content)
    } else {
        builder.text(content)
    };
    if let Some(base) = args.base {
        builder = builder.base_portions(base);
    }

    let scaled = builder.build()?;
    if args.json {
        Ok(serde_json::to_string_pretty(&scaled)?)
    } else {
        Ok(format!("{}\n{}", scaled.label, scaled.ingredients.join("\n")))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let args = parse_args(&args)?;

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Scaling failed: {}", e);
            Err(e)
        }
    }
}
