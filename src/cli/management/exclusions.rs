use anyhow::Result;
use clap::Args;

use crate::core::text::ExclusionSet;
use crate::services::SimpleServices;

#[derive(Args)]
pub struct ExclusionsArgs {
    /// Additional words to exclude, comma-separated
    #[arg(long, default_value = "")]
    add: String,

    /// Words to delete from the exclusion list, comma-separated
    #[arg(long, default_value = "")]
    remove: String,
}

pub async fn execute(args: ExclusionsArgs, services: &SimpleServices) -> Result<()> {
    let exclusions = resolve(&args, services);
    print!("{}", render(&exclusions));
    Ok(())
}

fn render(exclusions: &ExclusionSet) -> String {
    if exclusions.is_empty() {
        return "No words are excluded; every word can be masked.\n".to_string();
    }

    let mut out = format!("Excluded words ({}):\n", exclusions.len());
    for word in exclusions.iter() {
        out.push_str(&format!("  {}\n", word));
    }
    out
}

fn resolve(args: &ExclusionsArgs, services: &SimpleServices) -> ExclusionSet {
    services.mask_options(&args.add, &args.remove, None, None).exclusions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_resolve_applies_config_and_flags() {
        let services = SimpleServices::new(Config {
            extra_exclusions: vec!["baby".to_string()],
            ..Config::default()
        });
        let args = ExclusionsArgs {
            add: "yeah".to_string(),
            remove: "I,baby".to_string(),
        };

        let set = resolve(&args, &services);
        assert!(set.contains("yeah"));
        assert!(set.contains("you"));
        assert!(!set.contains("baby"));
        assert!(!set.contains("I"));
    }

    #[test]
    fn test_render_lists_sorted_words() {
        let set = ExclusionSet::from_words(["you", "I"]);
        assert_eq!(render(&set), "Excluded words (2):\n  I\n  you\n");
    }

    #[test]
    fn test_render_when_everything_removed() {
        let set = ExclusionSet::build(Vec::<String>::new(), crate::core::text::exclusions::BASE_EXCLUSIONS);
        assert!(set.is_empty());
        assert_eq!(render(&set), "No words are excluded; every word can be masked.\n");
    }
}
