//! Builders for hooks that run `nvidia-ctk hook <subcommand>` at container creation

use std::path::Path;

use crate::types::base_name;
use crate::{Discover, Empty, Hook, HookLifecycle};

/// Subcommand that creates symlinks inside the container
pub const CREATE_SYMLINKS_HOOK: &str = "create-symlinks";

/// Build a create-container hook invoking `nvidia_ctk_path hook <hook_name> <additional_args>...`
pub fn create_nvidia_ctk_hook<I, S>(
    nvidia_ctk_path: &Path,
    hook_name: &str,
    additional_args: I,
) -> Hook
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = vec![
        base_name(nvidia_ctk_path),
        "hook".to_string(),
        hook_name.to_string(),
    ];
    args.extend(additional_args.into_iter().map(Into::into));

    Hook {
        lifecycle: HookLifecycle::CreateContainer,
        path: nvidia_ctk_path.to_path_buf(),
        args,
    }
}

/// Build a discoverer for a hook that creates the requested symlinks.
///
/// Each entry in `links` is passed verbatim after a `--link` flag, in order.
/// With no links there is nothing for the helper to do, so the [`Empty`]
/// discoverer is returned instead of a hook.
pub fn create_symlink_hook<S: AsRef<str>>(
    nvidia_ctk_path: &Path,
    links: &[S],
) -> Box<dyn Discover> {
    if links.is_empty() {
        return Box::new(Empty);
    }

    let args = links.iter().flat_map(|link| ["--link", link.as_ref()]);

    Box::new(create_nvidia_ctk_hook(nvidia_ctk_path, CREATE_SYMLINKS_HOOK, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_nvidia_ctk_hook_args() {
        let hook = create_nvidia_ctk_hook(
            Path::new("/usr/bin/nvidia-ctk"),
            "update-ldcache",
            ["--folder", "/usr/lib64"],
        );

        assert_eq!(hook.lifecycle, HookLifecycle::CreateContainer);
        assert_eq!(hook.path, PathBuf::from("/usr/bin/nvidia-ctk"));
        assert_eq!(
            hook.args,
            vec!["nvidia-ctk", "hook", "update-ldcache", "--folder", "/usr/lib64"]
        );
    }

    #[test]
    fn test_nvidia_ctk_hook_without_extra_args() {
        let hook = create_nvidia_ctk_hook(
            Path::new("/opt/toolkit/nvidia-ctk"),
            "chmod",
            Vec::<String>::new(),
        );

        assert_eq!(hook.args, vec!["nvidia-ctk", "hook", "chmod"]);
    }

    #[test]
    fn test_nvidia_ctk_hook_argv0_is_base_name() {
        let hook = create_nvidia_ctk_hook(Path::new("/x/y/renamed-ctk"), "create-symlinks", ["a"]);
        assert_eq!(hook.args[0], "renamed-ctk");
    }

    #[test]
    fn test_symlink_hook_without_links_is_empty() {
        let links: [&str; 0] = [];
        let discoverer = create_symlink_hook(Path::new("/usr/bin/nvidia-ctk"), &links);

        assert!(discoverer.devices().unwrap().is_empty());
        assert!(discoverer.mounts().unwrap().is_empty());
        assert!(discoverer.hooks().unwrap().is_empty());
    }

    #[test]
    fn test_symlink_hook_args_preserve_order() {
        let discoverer =
            create_symlink_hook(Path::new("/usr/bin/nvidia-ctk"), &["/a->/b", "/c->/d"]);

        let hooks = discoverer.hooks().unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].path, PathBuf::from("/usr/bin/nvidia-ctk"));
        assert_eq!(
            hooks[0].args,
            vec![
                "nvidia-ctk",
                "hook",
                "create-symlinks",
                "--link",
                "/a->/b",
                "--link",
                "/c->/d",
            ]
        );
        assert!(discoverer.devices().unwrap().is_empty());
        assert!(discoverer.mounts().unwrap().is_empty());
    }

    #[test]
    fn test_symlink_hook_keeps_duplicates() {
        let links = vec!["libcuda.so.1::/usr/lib/libcuda.so".to_string(); 2];
        let discoverer = create_symlink_hook(Path::new("/usr/bin/nvidia-ctk"), &links);

        let hooks = discoverer.hooks().unwrap();
        assert_eq!(hooks[0].args.iter().filter(|a| *a == "--link").count(), 2);
    }

    #[test]
    fn test_builders_are_idempotent() {
        let path = Path::new("/usr/bin/nvidia-ctk");
        let links = ["/a->/b"];

        assert_eq!(
            create_symlink_hook(path, &links).hooks().unwrap(),
            create_symlink_hook(path, &links).hooks().unwrap()
        );
        assert_eq!(
            create_nvidia_ctk_hook(path, "chmod", ["--mode", "755"]),
            create_nvidia_ctk_hook(path, "chmod", ["--mode", "755"])
        );
    }
}
