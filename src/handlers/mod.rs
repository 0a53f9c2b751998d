pub mod products;

pub async fn root() -> &'static str {
    "hello"
}

pub async fn about() -> &'static str {
    "About page"
}
