use crate::commands::cue::{CheckCommand, ConvertCommand, ShowCommand, SignCommand};
use crate::error::{CliError, CliResult};
use cuetools::Config;
use cuetools::cue::{Cue, ParseOptions, classify, parse};
use futures::{StreamExt, stream};
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Sheets parsed at the same time.
const PARSE_CONCURRENCY: usize = 8;

pub async fn read_cue(path: &Path, options: &ParseOptions) -> CliResult<Cue> {
    debug!("Parsing CUE file: {path:?}");
    let data = fs::read(path).await?;
    let options = options.clone();

    let cue = tokio::task::spawn_blocking(move || parse(&data, &options)).await??;
    debug!(
        "Parsed {path:?}: encoding {}, {} files, {} tracks",
        cue.encoding,
        cue.files.len(),
        cue.tracks.len()
    );

    Ok(cue)
}

/// Parses every sheet, keeping the input order.
pub async fn read_all(
    pb: &MultiProgress,
    paths: &[PathBuf],
    options: &ParseOptions,
) -> Vec<(PathBuf, CliResult<Cue>)> {
    let bar = pb.add(ProgressBar::new(paths.len() as u64));

    let results: Vec<_> = stream::iter(paths.iter().cloned())
        .map(|path| {
            let bar = bar.clone();
            async move {
                let result = read_cue(&path, options).await;
                bar.inc(1);
                (path, result)
            }
        })
        .buffered(PARSE_CONCURRENCY)
        .collect()
        .await;

    bar.finish_and_clear();
    pb.remove(&bar);

    results
}

fn describe(path: &Path, cue: &Cue) -> String {
    let mut out = vec![
        format!("{}", path.display()),
        format!("  encoding:  {}", cue.encoding),
        format!("  performer: {}", cue.performer),
        format!("  title:     {}", cue.title),
    ];

    if !cue.catalog.is_empty() {
        out.push(format!("  catalog:   {}", cue.catalog));
    }

    for (key, value) in cue.rems.iter() {
        out.push(format!("  rem {key}: {value}"));
    }

    for track in &cue.tracks {
        let file = cue.file_of(track).map(|f| f.name.as_str()).unwrap_or("?");
        let start = track
            .find_index("01")
            .or(track.indexes().first())
            .map(|index| index.timestamp())
            .unwrap_or_default();

        out.push(format!(
            "  {} {:<5} {start} {} / {} [{file}]",
            track.number, track.track_type, track.performer, track.title
        ));
    }

    out.join("\n")
}

/// Returns the number of sheets that could not be processed.
pub async fn show(pb: &MultiProgress, cmd: ShowCommand, config: &Config) -> CliResult<usize> {
    let mut failures = 0;

    for (path, result) in read_all(pb, &cmd.input, &config.parse).await {
        match result {
            Ok(cue) if cmd.json => println!("{}", serde_json::to_string_pretty(&cue)?),
            Ok(cue) => println!("{}", describe(&path, &cue)),
            Err(err) => {
                error!("{path:?}: {err}");
                failures += 1;
            }
        }
    }

    Ok(failures)
}

pub async fn sign(pb: &MultiProgress, cmd: SignCommand, config: &Config) -> CliResult<usize> {
    let mut failures = 0;
    debug!("Signing with {:?}", config.sign);

    for (path, result) in read_all(pb, &cmd.input, &config.parse).await {
        match result {
            Ok(cue) => println!("{} {}", cue.hex_sign(config.sign), path.display()),
            Err(err) => {
                error!("{path:?}: {err}");
                failures += 1;
            }
        }
    }

    Ok(failures)
}

pub async fn check(pb: &MultiProgress, cmd: CheckCommand, config: &Config) -> CliResult<usize> {
    let mut failures = 0;

    for (path, result) in read_all(pb, &cmd.input, &config.parse).await {
        let cue = match result {
            Ok(cue) => cue,
            Err(err) => {
                error!("{path:?}: {err}");
                failures += 1;
                continue;
            }
        };

        let report = cue.check();
        for message in &report.errors {
            error!("{path:?}: {message}");
        }
        for message in &report.warnings {
            warn!("{path:?}: {message}");
        }

        let classification = classify(&cue);
        info!(
            "{path:?}: {} files, {} tracks, image: {}, tracks: {}",
            cue.files.len(),
            cue.tracks.len(),
            classification.image,
            classification.tracks
        );

        if !report.is_ok() {
            failures += 1;
        }
    }

    Ok(failures)
}

pub async fn convert(cmd: ConvertCommand, config: &Config) -> CliResult<()> {
    if fs::metadata(&cmd.output).await.is_ok() && !cmd.force {
        return Err(CliError::OutputAlreadyExists(cmd.output));
    }

    let cue = read_cue(&cmd.input, &config.parse).await?;
    let data = cue.dumps(&config.write)?;

    debug!(
        "Writing {} bytes as {} (BOM: {}) to {:?}",
        data.len(),
        config.write.encoding,
        config.write.bom,
        cmd.output
    );
    fs::write(&cmd.output, data).await?;

    info!("Converted {:?} to {:?}", cmd.input, cmd.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuetools::cue::WriteOptions;
    use tempfile::tempdir;

    const SHEET: &str = "REM GENRE Jazz\nPERFORMER \"Artist\"\nTITLE \"Album\"\nFILE \"album.wav\" WAVE\n  TRACK 01 AUDIO\n    TITLE \"One\"\n    INDEX 01 00:00:00\n";

    fn convert_command(input: PathBuf, output: PathBuf, force: bool) -> ConvertCommand {
        ConvertCommand {
            input,
            output,
            output_encoding: "utf-8".to_string(),
            no_bom: false,
            force,
        }
    }

    #[tokio::test]
    async fn read_cue_parses_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("album.cue");
        std::fs::write(&path, SHEET).unwrap();

        let cue = read_cue(&path, &ParseOptions::default()).await.unwrap();
        assert_eq!(cue.title, "Album");
        assert_eq!(cue.data, SHEET.as_bytes());
    }

    #[tokio::test]
    async fn read_all_keeps_order_and_reports_failures() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.cue");
        let missing = dir.path().join("missing.cue");
        std::fs::write(&good, SHEET).unwrap();

        let results = read_all(
            &MultiProgress::new(),
            &[missing.clone(), good.clone()],
            &ParseOptions::default(),
        )
        .await;

        assert_eq!(results[0].0, missing);
        assert!(matches!(results[0].1, Err(CliError::IoError(_))));
        assert_eq!(results[1].0, good);
        assert!(results[1].1.is_ok());
    }

    #[tokio::test]
    async fn convert_writes_bom_prefixed_sheet() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.cue");
        let output = dir.path().join("out.cue");
        std::fs::write(&input, SHEET).unwrap();

        convert(convert_command(input, output.clone(), false), &Config::default())
            .await
            .unwrap();

        let written = std::fs::read(&output).unwrap();
        assert_eq!(&written[..3], &[0xEF, 0xBB, 0xBF]);
        let text = String::from_utf8(written[3..].to_vec()).unwrap();
        assert!(text.starts_with(
            "REM GENRE \"Jazz\"\nPERFORMER \"Artist\"\nTITLE \"Album\"\nFILE \"album.wav\" WAVE\n"
        ));
        assert!(text.ends_with("    INDEX 01 00:00:00\n"));
    }

    #[tokio::test]
    async fn convert_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.cue");
        let output = dir.path().join("out.cue");
        std::fs::write(&input, SHEET).unwrap();
        std::fs::write(&output, "keep me").unwrap();

        let result = convert(convert_command(input.clone(), output.clone(), false), &Config::default()).await;
        assert!(matches!(result, Err(CliError::OutputAlreadyExists(_))));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me");

        let config = Config {
            write: WriteOptions {
                encoding: "utf-8".to_string(),
                bom: false,
            },
            ..Default::default()
        };
        convert(convert_command(input, output.clone(), true), &config)
            .await
            .unwrap();
        assert!(std::fs::read_to_string(&output).unwrap().starts_with("REM GENRE"));
    }

    #[test]
    fn describe_lists_tracks() {
        let cue = cuetools::cue::parse_str(SHEET).unwrap();
        let text = describe(Path::new("album.cue"), &cue);

        assert!(text.starts_with("album.cue\n"));
        assert!(text.contains("01 AUDIO 00:00:00 Artist / One [album.wav]"));
    }
}
