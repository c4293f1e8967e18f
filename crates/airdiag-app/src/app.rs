//! Command execution and the annotate pipeline.

use crate::backend::{DocumentRef, ImagePageRenderer, PageRenderer};
use crate::cli::{Cli, Command};
use crate::config::{AppConfig, OutputFormat};
use crate::error::{AppError, AppResult};
use crate::report;
use airdiag_core::{
    AirportList, ComparisonResult, CycleInfo, HistoricalLookup, SurfaceSide, load_response,
};
use airdiag_render::{OverlayStats, Rasterizer, Scene, draw_highlights, placeholder_scene, to_svg};
use std::fs;
use std::path::{Path, PathBuf};

/// One annotated surface written to disk.
#[derive(Debug, Clone)]
pub struct SurfaceOutput {
    pub side: SurfaceSide,
    pub path: PathBuf,
    /// `None` when the page failed to render and a placeholder was written.
    pub stats: Option<OverlayStats>,
}

/// The annotate pipeline: render both diagram versions, draw the overlay on
/// each, write the results.
pub struct App {
    config: AppConfig,
    backend: Box<dyn PageRenderer>,
    rasterizer: Option<Rasterizer>,
}

impl App {
    /// Create an app that reads pre-rasterized pages from the configured directory.
    pub fn new(config: AppConfig) -> Self {
        let backend = ImagePageRenderer::new(
            config.pages_dir.clone(),
            config.source_dpi,
            config.display_width,
        );
        Self::with_backend(config, Box::new(backend))
    }

    /// Create an app with a custom page backend.
    pub fn with_backend(config: AppConfig, backend: Box<dyn PageRenderer>) -> Self {
        let rasterizer = (config.format == OutputFormat::Png).then(Rasterizer::default);
        Self {
            config,
            backend,
            rasterizer,
        }
    }

    /// Annotate the old and new diagrams of a comparison.
    ///
    /// Both pages are rendered concurrently; each surface is annotated as soon
    /// as its own page is ready, and a failed page only affects its own surface.
    pub fn compare(&self, result: &ComparisonResult) -> AppResult<Vec<SurfaceOutput>> {
        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            AppError::Io(format!(
                "Failed to create {}: {}",
                self.config.output_dir.display(),
                e
            ))
        })?;

        let old_doc = DocumentRef::new(&result.airport_code, &result.old_cycle);
        let new_doc = DocumentRef::new(&result.airport_code, &result.new_cycle);
        log::info!("Annotating {} and {}", old_doc, new_doc);

        let (old, new) = pollster::block_on(async {
            futures::join!(
                self.annotate_surface(result, SurfaceSide::Old, &old_doc),
                self.annotate_surface(result, SurfaceSide::New, &new_doc),
            )
        });
        Ok(vec![old?, new?])
    }

    async fn annotate_surface(
        &self,
        result: &ComparisonResult,
        side: SurfaceSide,
        document: &DocumentRef,
    ) -> AppResult<SurfaceOutput> {
        let (mut scene, metadata) = match self.backend.render(document).await {
            Ok(page) => (
                Scene::new(page.metadata.canvas_size()).with_background(page.bitmap),
                Some(page.metadata),
            ),
            Err(e) => {
                log::warn!("Could not render {}: {}", document, e);
                (placeholder_scene(&e.to_string()), None)
            }
        };

        let stats = draw_highlights(
            &mut scene,
            &result.taxiway_changes,
            metadata.as_ref(),
            side,
            &result.runway_changes,
        );

        let path = self.config.output_dir.join(format!(
            "{}_{}.{}",
            document.file_stem(),
            side.name(),
            self.config.format.extension()
        ));
        self.write_scene(&scene, &path)?;
        log::info!("Wrote {}", path.display());

        Ok(SurfaceOutput {
            side,
            path,
            stats: metadata.map(|_| stats),
        })
    }

    fn write_scene(&self, scene: &Scene, path: &Path) -> AppResult<()> {
        let bytes = match &self.rasterizer {
            Some(rasterizer) => rasterizer.scene_to_png(scene)?,
            None => to_svg(scene).into_bytes(),
        };
        fs::write(path, bytes)
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Command::Compare(args) => {
            let config = args.apply(config);
            config.validate()?;
            let result: ComparisonResult = load_response(&args.comparison)?;
            print!("{}", report::comparison_report(&result));

            let outputs = App::new(config).compare(&result)?;
            for output in outputs {
                match output.stats {
                    Some(stats) => println!(
                        "{} diagram: {} ({} markers)",
                        output.side.name(),
                        output.path.display(),
                        stats.drawn
                    ),
                    None => println!(
                        "{} diagram: {} (placeholder)",
                        output.side.name(),
                        output.path.display()
                    ),
                }
            }
        }
        Command::Airports { file } => {
            let list: AirportList = load_response(&file)?;
            print!("{}", report::airport_list_report(&list));
        }
        Command::Cycles { file } => {
            let cycles: CycleInfo = load_response(&file)?;
            print!("{}", report::cycles_report(&cycles));
        }
        Command::History { file, airport } => {
            let lookup: HistoricalLookup = load_response(&file)?;
            print!("{}", report::historical_report(&airport, &lookup));
        }
    }
    Ok(())
}
