//! Encodes one key/value pair and dumps the element bytes.
//!
//! Usage: `cargo run --example encode_element -- <key> <value> [oid-hex]`

use cbson::{encode_element, encode_key, format_oid, parse_oid, shuffle_oid, Value};

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let mut args = std::env::args().skip(1);
    let key = args.next().unwrap_or_else(|| "greeting".to_string());
    let value = args.next().unwrap_or_else(|| "hello".to_string());

    let name = encode_key(&key).expect("Failed to encode key");
    let bytes = encode_element(&name, &Value::from(value.as_str())).expect("Failed to encode");

    println!("=== Element ===");
    println!("Key: {:?}", key);
    println!("Value: {:?}", value);
    println!("Size: {} bytes", bytes.len());
    println!("Bytes: {}", hex_dump(&bytes));

    // Non-string kinds take the slow path.
    match encode_element(&name, &Value::from(42i32)) {
        Ok(_) => println!("\nInt32 encoded on fast path"),
        Err(e) if e.is_fallback() => println!("\nInt32: {} (fall back)", e),
        Err(e) => println!("\nInt32: {}", e),
    }

    if let Some(hex) = args.next() {
        let oid = parse_oid(&hex).expect("Failed to parse oid");
        let wire = shuffle_oid(&oid).expect("Failed to shuffle oid");
        println!("\n=== ObjectId ===");
        println!("In:   {}", format_oid(&oid));
        println!("Wire: {}", format_oid(&wire));
    }
}
