pub mod app;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use app::App;

    console_error_panic_hook::set_once();

    let subscriber = tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt::with(
        tracing_subscriber::Registry::default(),
        console::ConsoleLayer::new(console::ConsoleLayerConfig {
            line: false,
            target: false,
        }),
    );
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        leptos::logging::warn!("tracing subscriber was already set: {}", err);
    }

    leptos::mount_to_body(App)
}

/// Browser console output for `tracing`, styled per level.
#[cfg(feature = "hydrate")]
mod console {
    use wasm_bindgen::prelude::wasm_bindgen;

    pub struct ConsoleLayer {
        spans: std::sync::Mutex<indexmap::IndexMap<tracing::span::Id, String>>,
        config: ConsoleLayerConfig,
    }

    pub struct ConsoleLayerConfig {
        pub target: bool,
        pub line: bool,
    }

    impl ConsoleLayer {
        pub fn new(config: ConsoleLayerConfig) -> Self {
            Self {
                spans: std::sync::Mutex::new(indexmap::IndexMap::new()),
                config,
            }
        }

        fn open_spans(&self) -> String {
            let Ok(spans) = self.spans.lock() else {
                return String::new();
            };
            if spans.is_empty() {
                return String::new();
            }
            let joined = spans.values().cloned().collect::<Vec<String>>().join(", ");
            format!(" {}", joined)
        }
    }

    impl<S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>>
        tracing_subscriber::Layer<S> for ConsoleLayer
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            let spans = self.open_spans();

            let mut value = String::new();
            let writer = tracing_subscriber::fmt::format::Writer::new(&mut value);
            let mut visitor = tracing_subscriber::fmt::format::PrettyVisitor::new(writer, true);
            event.record(&mut visitor);

            let meta = event.metadata();
            let level = meta.level();
            let target = if self.config.target {
                format!(" {}", meta.target())
            } else {
                String::new()
            };
            let origin = if self.config.line {
                meta.file()
                    .and_then(|file| meta.line().map(|ln| format!(" {}:{}", file, ln)))
                    .unwrap_or_default()
            } else {
                String::new()
            };

            log5(
                format!("%c{level}%c{spans}%c{target}{origin}%c: {value}"),
                match *level {
                    tracing::Level::TRACE => "color: dodgerblue; background: #444",
                    tracing::Level::DEBUG => "color: lawngreen; background: #444",
                    tracing::Level::INFO => "color: whitesmoke; background: #444",
                    tracing::Level::WARN => "color: orange; background: #444",
                    tracing::Level::ERROR => "color: red; background: #444",
                },
                "color: inherit; font-weight: bold",
                "color: gray; font-style: italic",
                "color: inherit",
            );
        }

        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let meta = attrs.metadata();
            if !meta.target().contains("studio") {
                return;
            }
            let name = meta.name();

            let mut body = String::new();
            let writer = tracing_subscriber::fmt::format::Writer::new(&mut body);
            let mut visitor = tracing_subscriber::fmt::format::PrettyVisitor::new(writer, true);
            attrs.record(&mut visitor);

            let has_name = !name.is_empty() && name != "{}";
            let has_body = !body.is_empty() && body != "{}";

            let output = match (has_name, has_body) {
                (true, false) => name.to_string(),
                (true, true) => format!("{} = {}", name, body),
                (false, false) => String::from("{}"),
                (false, true) => body,
            };

            if let Ok(mut spans) = self.spans.lock() {
                spans.insert(id.clone(), output);
            }
        }

        fn on_exit(&self, id: &tracing::span::Id, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            if let Ok(mut spans) = self.spans.lock() {
                spans.swap_remove(id);
            }
        }

        fn on_close(&self, id: tracing::span::Id, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            if let Ok(mut spans) = self.spans.lock() {
                spans.swap_remove(&id);
            }
        }
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn log5(message1: String, message2: &str, message3: &str, message4: &str, message5: &str);
    }
}
