use anyhow::Result;
use talentbook_core::{check_concurrency_raw, ConflictNotice, Locale};
use talentbook_domain::Config;

/// Exit successfully when a write may proceed; print the conflict otherwise.
pub fn run(original: Option<&str>, current: Option<&str>, config: Option<&Config>) -> Result<()> {
    if check_concurrency_raw(original, current) {
        println!("ok: no conflict");
        return Ok(());
    }

    let locale = config.map_or_else(Locale::default, |c| Locale::from_tag(&c.ui.locale));
    let notice = ConflictNotice::new("-", None, None, locale);
    println!("{}: {}", notice.title, notice.message);
    for (_, label) in notice.actions() {
        println!("  [{label}]");
    }
    anyhow::bail!("snapshot {} is older than {}", original.unwrap_or("-"), current.unwrap_or("-"))
}
