/// Nested query-string usage example
use urlkit::{Map, Value, decode, deparam, encode, param};

fn main() {
    // Decode a query string into nested values
    let params = deparam("a[]=4&a[]=5&b[x][]=7&b[y]=8&c=true&d=hello+world", true);
    println!("a: {:?}", params["a"]); // Seq([Number(4.0), Number(5.0)])
    println!("b.y: {:?}", params["b"].get("y")); // Some(Number(8.0))
    println!("c: {:?}", params["c"]); // Bool(true)
    println!("d: {:?}", params["d"]); // String("hello world")
    println!();

    // Serialize it back, bracket style
    println!("param: {}", param(&params, false)); // a%5B%5D=4&a%5B%5D=5&b%5Bx%5D%5B%5D=7&b%5By%5D=8&c=true&d=hello+world
    println!();

    // Traditional mode repeats the key for each item
    let mut tags = Map::new();
    tags.insert("tags".to_string(), Value::from(vec!["rust", "url"]));
    tags.insert("page".to_string(), Value::from(1));
    println!("traditional: {}", param(&tags, true)); // tags=rust&tags=url&page=1

    // Form fields take each value as written; a sequence joins with ','
    let fields = vec![
        ("tags".to_string(), Value::from(vec!["rust", "url"])),
        ("page".to_string(), Value::from(1)),
    ];
    println!("fields: {}", param(&fields, true)); // tags=rust,url&page=1
    println!();

    // Component encoding on its own
    let encoded = encode("a b&c/d");
    println!("encode: {encoded}"); // a%20b%26c/d
    println!("decode: {}", decode(&encoded)); // a b&c/d
}
