use urlkit::{Field, parse};

fn main() {
    // Parse a URL into its components
    let mut parts = parse(
        Some("https://user:pw@example.com:8080/docs/guide.pdf?page=2&lang=en#intro"),
        false,
    )
    .expect("Failed to parse URL");

    println!("Protocol: {:?}", parts.protocol); // Some("https")
    println!("Authority: {:?}", parts.authority); // Some("user:pw@example.com:8080")
    println!("Host: {:?}", parts.host); // Some("example.com")
    println!("Port: {:?}", parts.port); // Some("8080")
    println!("Directory: {:?}", parts.directory); // Some("/docs/")
    println!("Filename: {:?}", parts.filename); // Some("guide")
    println!("Extension: {:?}", parts.file_ext); // Some("pdf")
    println!("Params: {:?}", parts.params); // page => 2, lang => "en"
    println!("Anchor: {:?}", parts.anchor); // Some("intro")
    println!();

    // Change one component; the composites above it are cleared
    parts.set(Field::Port, "9090");
    parts.set(Field::FileExt, "html");
    println!("Rebuilt: {}", parts.build()); // https://user:pw@example.com:9090/docs/guide.html?page=2&lang=en#intro

    // Remove a component and everything that contains it
    parts.clear(Field::UserInfo);
    println!("Without credentials: {parts}"); // https://example.com:9090/docs/guide.html?page=2&lang=en#intro
}
