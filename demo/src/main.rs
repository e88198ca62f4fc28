use dynarr_log::{Color, info, error};
use dynarr_mem::{ArrayConfig, ArrayError, DynamicArray, Sparse};

fn parse_config() -> ArrayConfig {
    let mut args = std::env::args().skip(1);
    let mut config = ArrayConfig::default();
    if let Some(capacity) = args.next().and_then(|arg| arg.parse().ok()) {
        config = config.with_capacity(capacity);
    }
    if let Some(growth_factor) = args.next().and_then(|arg| arg.parse().ok()) {
        config = config.with_growth_factor(growth_factor);
    }
    config
}

fn run(config: ArrayConfig) -> Result<(), ArrayError> {
    let mut words = DynamicArray::from_config(&config)?;
    for word in ["texture", "treatment", "jail", "zip", "zinc", "enthusiastic"] {
        words.add(word);
    }
    info!("{} words, capacity {}", words.len(), words.capacity());

    let extra = [None, Some("argue"), Some("five"), None, Some("pet"), None];
    words.add_all(Sparse(&extra))?;
    info!("after sparse add_all: {}", words);

    words.insert(0, "arithmetic")?;
    let removed = words.remove(words.len() - 1)?;
    info!("inserted at front, removed {:?} from back", removed);

    words.sort();
    info!("sorted: {}", words);

    words.sort_by(|a, b| b.len().cmp(&a.len()));
    info!("longest first: {}", words);

    words.trim();
    info!("trimmed to capacity {}", words.capacity());

    if let Err(err) = words.get(words.len()) {
        info!("expected failure: {}", err);
    }
    Ok(())
}

fn main() {
    dynarr_log::init();
    let _ = dynarr_log::info_fmt(|builder| {
        builder
            .text("demo ", |spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Cyan)).set_bold(true); }))
            .message(|spec| spec);
    });
    if let Err(err) = run(parse_config()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
