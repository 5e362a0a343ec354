use anyhow::Context;
use chrono::Local;
use mushafaladhan::{prayer_window, AladhanClient};
use mushafcache::TtlCache;
use mushafplayback::{NullSink, VersePlaybackController};
use mushafquran::{verse_audio_url, CachedQuranClient, FetchOptions, QuranClient, ReadingPosition};
use mushafstore::{BookmarkStore, FileStore, PreferenceStore, Preferences, Toggled};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Fallback coordinates when none are given on the command line (Dhaka)
const DEFAULT_LATITUDE: f64 = 23.8103;
const DEFAULT_LONGITUDE: f64 = 90.4125;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Usage: mushaf [/surah/{s}/{v}] [latitude longitude]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let route = args.first().map(String::as_str).unwrap_or("/surah/1/1");
    let position = ReadingPosition::parse(route)
        .with_context(|| format!("Cannot parse reading position '{route}'"))?;

    let (latitude, longitude) = match (args.get(1), args.get(2)) {
        (Some(lat), Some(lon)) => (
            lat.parse().context("Invalid latitude")?,
            lon.parse().context("Invalid longitude")?,
        ),
        _ => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
    };

    // ========== Preferences and bookmarks ==========

    let store = FileStore::default_location().context("Cannot open the store directory")?;
    info!("📖 Store directory: {}", store.dir().display());

    let pref_store = PreferenceStore::new(store);
    let prefs = pref_store.load().unwrap_or_else(|e| {
        warn!("⚠️ Failed to load preferences, using defaults: {e}");
        Preferences::default()
    });
    info!(
        "Reciter: {}, auto-advance: {}",
        prefs.selected_reciter, prefs.auto_play_next
    );

    // ========== Content ==========

    let options = FetchOptions {
        translations_en: prefs.selected_translations.en.clone(),
        translations_bn: prefs.selected_translations.bn.clone(),
        tafsirs_en: prefs.selected_tafsirs.en.clone(),
        tafsirs_bn: prefs.selected_tafsirs.bn.clone(),
        word_by_word: true,
        reciter: None,
    };

    let cache = TtlCache::new(FileStore::default_location()?);
    let client = CachedQuranClient::new(QuranClient::new()?, cache);

    let surah = client
        .fetch_surah(position.surah, &options)
        .await
        .with_context(|| format!("Cannot fetch surah {}", position.surah))?;
    info!(
        "✅ {} ({}) — {} verses",
        surah.name.en, surah.translated_name, surah.verses_count
    );

    if let Some(verse) = surah.verses.iter().find(|v| v.number == position.verse) {
        println!("\n{}\n", verse.text_uthmani);
        println!("{}\n  — {}", verse.translations.en.text, verse.translations.en.author);
        if !verse.translations.bn.text.is_empty() {
            println!("{}\n  — {}", verse.translations.bn.text, verse.translations.bn.author);
        }
    } else {
        warn!(
            "⚠️ Verse {} not found in surah {} ({} verses)",
            position.verse, position.surah, surah.verses_count
        );
    }

    // ========== Prayer times ==========

    match AladhanClient::new() {
        Ok(aladhan) => {
            let today = Local::now().date_naive();
            match aladhan.prayer_times(latitude, longitude, today).await {
                Ok(schedule) => {
                    let now = Local::now().time();
                    match prayer_window(&schedule, now) {
                        Ok(window) => info!(
                            "🕌 Current prayer: {} — next {} at {} ({:.0}% elapsed)",
                            window.current,
                            window.next,
                            window.next_time.format("%H:%M"),
                            window.progress
                        ),
                        Err(e) => warn!("⚠️ Cannot compute prayer window: {e}"),
                    }
                }
                Err(e) => warn!("⚠️ Failed to fetch prayer times: {e}"),
            }

            match aladhan.qibla(latitude, longitude).await {
                Ok(qibla) => info!("🧭 Qibla direction: {:.2}°", qibla.direction),
                Err(e) => warn!("⚠️ Failed to fetch qibla direction: {e}"),
            }
        }
        Err(e) => warn!("⚠️ Prayer times unavailable: {e}"),
    }

    // ========== Bookmark toggle ==========

    let bookmarks = BookmarkStore::new(FileStore::default_location()?);
    match bookmarks.toggle(position.surah, position.verse) {
        Ok(Toggled::Added(id)) => info!("🔖 Bookmarked {} ({id})", position),
        Ok(Toggled::Removed) => info!("🔖 Removed bookmark for {}", position),
        Err(e) => warn!("⚠️ Failed to toggle bookmark: {e}"),
    }

    // ========== Playback ==========

    let reciter = prefs.selected_reciter.clone();
    let surah_number = position.surah;
    let mut controller = VersePlaybackController::new(
        NullSink::new(),
        surah.verses_count,
        prefs.auto_play_next,
        Box::new(move |verse| {
            verse_audio_url(&reciter, surah_number, verse)
                .unwrap_or_default()
        }),
    )?;

    controller.select_verse(position.verse).await?;
    controller.toggle_playback().await?;
    info!(
        "▶️ Playing verse {} of {} via {}",
        controller.current_verse(),
        surah.verses_count,
        prefs.selected_reciter
    );

    if let Some(next) = controller.on_playback_finished().await? {
        info!("⏭️ Auto-advanced to verse {next}");
    }

    Ok(())
}
