// Walkthrough of the optio combinators
//
// Run with `RUST_LOG=debug` to see the event emitted on a failed unwrap.

use anyhow::{Context, Result};
use colored::*;
use optio::{from_nullable, none, some, Maybe, Optional};
use tracing_subscriber::EnvFilter;

fn parse_port(raw: &str) -> Maybe<u16> {
    raw.parse::<u16>().ok().into()
}

fn lookup_user(id: u32) -> Maybe<&'static str> {
    match id {
        1 => some("ada"),
        2 => some("grace"),
        _ => none(),
    }
}

fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).blue());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    section("Construction");
    let greeting = some("Hello, World!");
    let missing: Maybe<&str> = none();
    println!("{} / {}", greeting, missing);
    println!("from_nullable(0, &0) = {:?}", from_nullable(0, &0));

    section("Mapping");
    println!("len = {}", greeting.map(|s| s.chars().count()));
    println!("map_or = {}", missing.map_or(42, |s| s.len()));

    section("Chaining");
    let port = parse_port("8080").filter(|p| *p >= 1024).or(some(8000));
    println!("port = {}", port);
    let name = lookup_user(3).or_else(|| lookup_user(1));
    println!("user = {}", name);
    let exclusive = some(1).xor(none());
    println!("xor = {}", exclusive);

    section("Iteration");
    for user in [1, 2, 3].into_iter().flat_map(lookup_user) {
        println!("{}", user.green());
    }

    section("Extraction");
    let value = port.unwrap().context("port was checked above")?;
    println!("unwrapped port = {}", value);
    match missing.unwrap() {
        Ok(v) => println!("unexpected {}", v),
        Err(e) => println!("{}", format!("error: {}", e).red()),
    }

    Ok(())
}
