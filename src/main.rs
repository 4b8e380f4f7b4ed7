use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use kafka_bridge::adapter::handler::{self, AppState};
use kafka_bridge::infrastructure::config::Config;
use kafka_bridge::infrastructure::diagnostic::{DiagnosticSink, StdoutSink};
use kafka_bridge::infrastructure::kafka::consumer::KafkaMessageConsumer;
use kafka_bridge::infrastructure::kafka::producer::{KafkaMessageProducer, MessagePublisher};
use kafka_bridge::infrastructure::logger;
use kafka_bridge::usecase::{ConsumeMessageUseCase, SendMessageUseCase};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
    let cfg = Config::load(&config_path)?;

    logger::init_logger(&cfg.observability);

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        environment = %cfg.app.environment,
        brokers = %cfg.kafka.brokers_string(),
        "starting kafka-bridge server"
    );

    let sink: Arc<dyn DiagnosticSink> = Arc::new(StdoutSink);

    // Kafka producer
    let publisher: Arc<dyn MessagePublisher> = Arc::new(KafkaMessageProducer::new(&cfg.kafka)?);
    info!(topic = %cfg.kafka.producer_topic, "kafka producer initialized");

    let send_message_uc = Arc::new(SendMessageUseCase::new(
        publisher,
        sink.clone(),
        cfg.kafka.producer_topic.clone(),
    ));
    let consume_message_uc = Arc::new(ConsumeMessageUseCase::new(sink));

    // Kafka consumer (background task)
    let shutdown = CancellationToken::new();
    let consumer = KafkaMessageConsumer::new(&cfg.kafka, consume_message_uc)?;
    let consumer_token = shutdown.clone();
    let consumer_task = tokio::spawn(async move { consumer.run(consumer_token).await });

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_token.cancel();
    });

    // Router
    let app = handler::router(AppState { send_message_uc });

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!("REST server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let server_token = shutdown.clone();
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move { server_token.cancelled().await })
        .await;

    shutdown.cancel();
    consumer_task.await?;
    served?;

    info!("kafka-bridge exited");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = signal::ctrl_c() => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
