//! Walk through every input shape `ekurtosis` accepts
//!
//! Run with `RUST_LOG=debug` to see the dispatch decisions.

use chisq_ekurtosis::{ekurtosis, Buffer, Data, DType, Matrix, OptionValue, RawOptions, Value};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Plain sequences
    let ks: Vec<f64> = (0..10).map(f64::from).collect();
    let out = ekurtosis(ks.clone(), None)?;
    println!("Sequences: {:?}\n", numbers(&out));

    // Sequences of records, read through an accessor
    let records: Vec<Value> = ks.iter().map(|&k| [("x", k)].into_iter().collect()).collect();
    let opts = RawOptions::new().set("accessor", OptionValue::function(|d: &Value| d["x"].clone()));
    let out = ekurtosis(records, Some(&opts))?;
    println!("Accessors: {:?}\n", numbers(&out));

    // Nested records, updated in place at a deep path
    let nested: Vec<Value> = ks
        .iter()
        .enumerate()
        .map(|(i, &k)| [("x", Value::from(vec![i as f64, k]))].into_iter().collect())
        .collect();
    let opts = RawOptions::new().set("path", "x/1").set("sep", "/");
    let out = ekurtosis(nested, Some(&opts))?;
    let json: serde_json::Value = Value::Array(out.into_sequence().unwrap_or_default()).into();
    println!("Deep set: {json}\n");

    // Buffers
    let buffer = Buffer::from(ks);
    let out = ekurtosis(buffer.clone(), None)?;
    println!("Buffers: {:?}\n", out.as_buffer().map(Buffer::to_vec_f64));

    // Matrices
    let matrix = Matrix::new(buffer, [5, 2])?;
    let out = ekurtosis(matrix.clone(), None)?;
    if let Some(m) = out.as_matrix() {
        println!("Matrix: {m}\n");
    }

    // Matrices with a custom output dtype
    let opts = RawOptions::new().set("dtype", DType::Uint8);
    let out = ekurtosis(matrix, Some(&opts))?;
    if let Some(m) = out.as_matrix() {
        println!("Matrix ({}): {m}\n", m.dtype());
    }

    Ok(())
}

fn numbers(data: &Data) -> Vec<f64> {
    data.as_sequence()
        .map(|items| items.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect())
        .unwrap_or_default()
}
