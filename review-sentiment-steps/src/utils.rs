use {
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

pub fn init_logging(json: bool) {
    let builder = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr);

    if json {
        builder.json()
            .finish()
            .with(filter_fn(mute_http_internals))
            .init();
    } else {
        builder.finish()
            .with(filter_fn(mute_http_internals))
            .init();
    }
}

fn mute_http_internals(metadata: &tracing::Metadata<'_>) -> bool {
    if metadata.target().starts_with("hyper") || metadata.target().starts_with("reqwest") {
        metadata.level() <= &Level::WARN
    } else {
        true
    }
}
