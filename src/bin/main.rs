use std::collections::HashMap;
use std::error::Error;

use snippets::{FrozenRecord, MeasureTime, Namespace, Record, Value, adapt, from_json, measure_time};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

const SUM_LABEL: &str = "sum(range(0, 1000000))";
const PARSE_LABEL: &str = "from_json(sample)";
const SAMPLE_JSON: &str = r#"{"a": 1, "b": "a string", "c": [1, 2, 3, 4]}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    measure_sum();
    adapt_samples()?;
    Ok(())
}

fn measure_sum() {
    {
        let _timer = MeasureTime::new(SUM_LABEL);
        println!("{}", (0..1_000_000u64).sum::<u64>());
    }

    measure_time(SUM_LABEL, || println!("{}", (0..1_000_000u64).sum::<u64>()));
}

fn adapt_samples() -> Result<()> {
    let map = HashMap::from([
        ("a".to_string(), Value::from(1)),
        ("b".to_string(), Value::from("a string")),
        ("c".to_string(), Value::from(vec![1, 2, 3, 4])),
    ]);
    let namespace = Namespace::from(map);
    println!("a = {}", namespace.attr("a")?);

    let parsed = measure_time(PARSE_LABEL, || from_json(SAMPLE_JSON))?;
    if let Some(namespace) = parsed.as_namespace() {
        println!("{namespace}");
    }

    let record: Record = adapt(namespace.clone())?;
    println!("{record:?}");

    let frozen: FrozenRecord = adapt(namespace)?;
    println!("{:?}", frozen.as_tuple());
    Ok(())
}
