use std::path::PathBuf;

use anyhow::Context;
use mnemos::config::config::AppConfig;
use mnemos::config::loader::{self, ConfigLoader};
use mnemos::index::knowledge_base::KnowledgeBase;
use mnemos::models::corpus::CorpusBundle;
use mnemos::services::corpus_builder::CorpusBuilder;
use mnemos::services::export::BundleExporter;
use mnemos::services::retrieval::create_retrieval_service;
use mnemos::services::synthesis::Synthesizer;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = if loader::config_exists() {
        ConfigLoader::load().context("failed to load configuration")?
    } else {
        AppConfig::development()
    };

    let _guard = init_tracing(&config);
    ConfigLoader::validate(&config)?;

    info!("Starting Mnemos...");

    let mut args = std::env::args().skip(1);
    let corpus_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.corpus.corpus_path.clone());
    let bundle_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.corpus.bundle_path.clone());
    let knowledge_path = config.corpus.knowledge_path.clone();

    let builder = CorpusBuilder::new(config.extraction.clone())?;
    let snapshot = builder.build_from_file(&corpus_path)?;
    info!("Corpus processed: {}", corpus_path.display());

    let synthesizer = Synthesizer::new(config.synthesis.clone());
    let records = synthesizer.synthesize(&snapshot);
    info!(records = records.len(), "Knowledge records synthesized");

    let bundle = CorpusBundle::assemble(snapshot, records, &corpus_path.display().to_string());
    BundleExporter::write_bundle(&bundle, &bundle_path)?;
    BundleExporter::write_jsonl(&bundle.knowledge_records, &knowledge_path)?;

    let knowledge = KnowledgeBase::load_jsonl(&knowledge_path, &config.index);
    info!(entries = knowledge.len(), "Knowledge base loaded");

    let retrieval = create_retrieval_service(knowledge, config.retrieval.clone());

    for query in [
        "What is CCCE?",
        "Explain the Ω-Recursive session functional",
        "What is phase conjugate healing?",
    ] {
        let context = retrieval.get_context(query, 500);
        info!(
            query,
            context_chars = context.chars().count(),
            "retrieval smoke query"
        );
    }

    info!(
        equations = bundle.statistics.equations_extracted,
        metrics = bundle.statistics.metrics_extracted,
        organisms = bundle.statistics.organisms_extracted,
        sections = bundle.statistics.sections_extracted,
        knowledge_records = bundle.statistics.knowledge_records,
        "Conversion complete"
    );

    Ok(())
}

/// 初始化日志订阅器；文件日志启用时返回写入守卫
fn init_tracing(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if let Some(log_dir) = &config.logging.log_dir {
        let appender = tracing_appender::rolling::daily(log_dir, "mnemos.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false);
        if config.logging.structured {
            builder.json().init();
        } else {
            builder.init();
        }
        Some(guard)
    } else {
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        if config.logging.structured {
            builder.json().init();
        } else {
            builder.init();
        }
        None
    }
}
