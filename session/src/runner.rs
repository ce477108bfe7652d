use crate::config::UniformCheckConfig;
use crate::controller::Session;
use crate::live::LiveSession;
use crate::notify::{ConsoleNotifier, NotifyOptions};
use crate::state::SessionState;
use capture::file_source::{acquire_image, acquire_video};
use detector_api_caller::config::DetectorApiConfig;
use detector_api_caller::json::detection::{DetectOutcome, DetectionResult};
use detector_api_caller::make_detector_client;
use detector_api_caller::traits::DetectorApi;
use logging::init_logging;
use options::run_options::RunCommand;
use options::run_options::check_options::{ImageOptions, LiveOptions, VideoOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

impl From<&UniformCheckConfig> for DetectorApiConfig {
    fn from(config: &UniformCheckConfig) -> Self {
        Self {
            detector_api_base_url: config.detector_api_address().to_string(),
            detector_api_proxy: config.detector_api_proxy().map(str::to_string),
        }
    }
}

pub async fn run(command: RunCommand) -> anyhow::Result<()> {
    init_logging();

    match command {
        RunCommand::Image(options) => run_image(options).await,
        RunCommand::Video(options) => run_video(options).await,
        RunCommand::Live(options) => run_live(options).await,
    }
}

async fn make_session(
    config_file_path: &Path,
) -> anyhow::Result<(Session<ConsoleNotifier>, UniformCheckConfig)> {
    let config = UniformCheckConfig::from_file_or_default(config_file_path)?;

    let detector_api = make_detector_client(DetectorApiConfig::from(&config))?;

    test_detector_api_connection(detector_api.as_ref()).await;

    let notify_options = NotifyOptions {
        auto_close: Some(Duration::from_millis(config.notify_auto_close_ms())),
    };

    let session = Session::new(
        detector_api,
        Arc::new(ConsoleNotifier),
        config.service_confidence(),
        notify_options,
    );

    Ok((session, config))
}

async fn test_detector_api_connection(api: &dyn DetectorApi) {
    match api.health().await {
        Ok(health) => {
            tracing::info!(
                "Initial test connection to the detection service succeeded (status: {}, model loaded: {})",
                health.status,
                health.model_loaded
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to make a test connection to the detection service. This could mean that the service is temporarily down, or that the address you used is wrong. Submissions will still be attempted. Error: {e}"
            );
        }
    }
}

async fn run_image(options: ImageOptions) -> anyhow::Result<()> {
    let (mut session, _config) = make_session(&options.common.config_file_path).await?;

    match acquire_image(Some(&options.file)) {
        Ok(sample) => {
            session.choose_sample(sample);
            session.submit().await;
        }
        Err(e) => session.report_capture_error(&e),
    }

    render_state(session.state());

    Ok(())
}

async fn run_video(options: VideoOptions) -> anyhow::Result<()> {
    let (mut session, _config) = make_session(&options.common.config_file_path).await?;

    match acquire_video(Some(&options.file)) {
        Ok(sample) => {
            session.choose_sample(sample);
            session.submit().await;
        }
        Err(e) => session.report_capture_error(&e),
    }

    render_state(session.state());

    Ok(())
}

async fn run_live(options: LiveOptions) -> anyhow::Result<()> {
    let (session, config) = make_session(&options.common.config_file_path).await?;
    let camera_index = options.camera_index.unwrap_or_else(|| config.camera_index());

    let mut live = LiveSession::new(session);
    live.start_camera(capture::camera::open_camera, camera_index);
    if !live.camera_is_open() {
        return Ok(());
    }

    let (stop_sender, mut stop_receiver) = tokio::sync::mpsc::unbounded_channel();

    ctrlc::set_handler(move || {
        tracing::info!("Sending a terminate (Ctrl+C) signal");
        let _ = stop_sender.send(());
    })
    .expect("Error setting Ctrl+C handler");

    println!("Camera is open. Press Enter to capture a frame; type `q` then Enter to quit.");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    None => break,
                    Some(line) if line.trim() == "q" => break,
                    Some(_) => {
                        live.capture_and_submit().await;
                        render_state(live.state());
                    }
                }
            }

            Some(()) = stop_receiver.recv() => {
                tracing::info!("Received stop signal; closing the camera.");
                break;
            }
        }
    }

    // The stream must be released on every exit path; drop would also do it,
    // but the normal path stops it explicitly.
    live.stop_camera();

    Ok(())
}

/// Operator-facing rendering of the current session state: preview location,
/// verdict, and the enumerated detail list. Low-confidence detections are
/// listed even when the verdict is negative.
fn render_state(state: &SessionState) {
    if let Some(sample) = state.sample() {
        println!("Preview: {}", sample.preview().path().display());
    }

    match state.verdict() {
        Some(true) => println!("Verdict: uniform present"),
        Some(false) => println!("Verdict: uniform absent"),
        None => (),
    }

    match state.outcome() {
        Some(DetectOutcome::Single(result)) => {
            println!("Detections: {}", result.count());
            render_result(result, "");
        }
        Some(DetectOutcome::PerFrame(video)) => {
            println!("Frames analyzed: {}", video.results.len());
            for (frame_index, result) in video.results.iter().enumerate() {
                if !result.detections.is_empty() {
                    println!("Frame {frame_index}:");
                    render_result(result, "  ");
                }
            }
        }
        None => (),
    }
}

fn render_result(result: &DetectionResult, indent: &str) {
    for (index, detection) in result.detections.iter().enumerate() {
        println!(
            "{indent}  {}. {} - confidence {:.3} - bbox {:?}",
            index + 1,
            detection.class_label,
            detection.confidence,
            detection.bbox
        );
    }
}
