use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::CoachResult;
use crate::services::orchestrator::Orchestrator;
use crate::structs::full_result::FullResult;
use crate::structs::song_candidate::SongCandidate;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> CoachResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Search { query } => self.search_command(&query).await,
            Commands::Analyze {
                title,
                artist,
                duration,
            } => self.analyze_command(&title, &artist, duration).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> CoachResult<()> {
        log::info!("🚀 Initializing chordcoach configuration...");

        match ConfigManager::create_sample_config() {
            Ok(()) => {
                log::info!("📝 Edit the configuration file to add your API key.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn search_command(&self, query: &str) -> CoachResult<()> {
        log::info!("🔍 Searching for: {}", query);

        let config = ConfigManager::load()?;
        let orchestrator = Orchestrator::new(&config.completion);
        let candidates = orchestrator.search(query).await;

        log::info!("\n🎵 Found {} songs:", candidates.len());
        for (i, song) in candidates.iter().enumerate() {
            Self::print_candidate(i + 1, song);
        }

        log::info!("\n💡 Run 'chordcoach analyze --title <TITLE> --artist <ARTIST>' to get the tutorial.");
        Ok(())
    }

    async fn analyze_command(
        &self,
        title: &str,
        artist: &str,
        duration: Option<u32>,
    ) -> CoachResult<()> {
        let config = ConfigManager::load()?;
        let orchestrator = Orchestrator::new(&config.completion);

        let song = SongCandidate::new(title, artist, duration.filter(|d| *d > 0).unwrap_or(180));
        let result = orchestrator.analyze(&song).await?;

        Self::print_result(&result);
        Ok(())
    }

    fn print_candidate(index: usize, song: &SongCandidate) {
        log::info!("{}. 🎶 {} — {}", index, song.title, song.artist);
        if let (Some(album), Some(year)) = (&song.album, song.year) {
            log::info!("   💿 {} ({})", album, year);
        }
        log::info!(
            "   ⏳ {}:{:02}  🔗 {}",
            song.duration_seconds / 60,
            song.duration_seconds % 60,
            song.canonical_url
        );
    }

    fn print_result(result: &FullResult) {
        let analysis = &result.analysis;

        log::info!("\n{}", "=".repeat(60));
        log::info!("🎼 {} — {}", analysis.song.title, analysis.song.artist);
        log::info!("{}", "=".repeat(60));
        log::info!(
            "🔑 Key: {}  🥁 Tempo: {} BPM  📈 Difficulty: {}",
            analysis.key,
            analysis.tempo_bpm,
            analysis.difficulty
        );
        if let Some(capo) = analysis.capo_position {
            log::info!("🎸 Capo: fret {}", capo);
        }
        if let Some(pattern) = &analysis.strumming_pattern {
            log::info!("🖐️ Strumming: {}", pattern);
        }

        for sheet in analysis.section_sheets() {
            let chords: Vec<&str> = sheet
                .events
                .iter()
                .map(|e| e.chord_symbol.as_str())
                .collect();
            log::info!("  [{}] {}", sheet.section, chords.join(" "));
        }

        let tutorial = &result.tutorial;
        log::info!("\n📚 Tutorial ({} min): {}", tutorial.estimated_minutes, tutorial.overview);
        for step in &tutorial.steps {
            log::info!("\n  {}. {}", step.step_number, step.title);
            log::info!("     {}", step.description);
            if !step.chords.is_empty() {
                log::info!("     🎵 Chords: {}", step.chords.join(", "));
            }
            for tip in &step.tips {
                log::info!("     💡 {}", tip);
            }
        }
        log::info!("\n📝 {}", tutorial.practice_notes);
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
