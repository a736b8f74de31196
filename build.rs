use std::cmp::Ordering;
use std::env;

// Kernel strategies the crate can compile its public entry points against
#[derive(PartialEq, Eq, Debug)]
struct KernelProfile {
    name: &'static str,
    cfg_flag: &'static str,
    selected: bool,
}

impl KernelProfile {
    // Define priority order between profiles (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "packed" => 0,
            "scalar" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    fn profiles() -> Vec<KernelProfile> {
        vec![
            KernelProfile {
                name: "scalar",
                cfg_flag: "tinydsp_scalar",
                selected: true,
            },
            KernelProfile {
                name: "packed",
                cfg_flag: "tinydsp_packed",
                selected: false,
            },
        ]
    }
}

impl Ord for KernelProfile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for KernelProfile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Selection rules, tried in order until one of them decides
trait ProfileSelector {
    fn select(&self, profiles: &mut [KernelProfile]);
    fn is_applicable(&self) -> bool;
}

fn mark(profiles: &mut [KernelProfile], name: &str) {
    for profile in profiles.iter_mut() {
        profile.selected = profile.name == name;
    }
}

// TINYDSP_BACKEND=scalar|packed wins over everything else
struct EnvOverride;
impl EnvOverride {
    const VALUES: &'static [&'static str] = &["scalar", "packed"];

    fn value() -> Option<String> {
        env::var("TINYDSP_BACKEND").ok().map(|v| v.to_lowercase())
    }
}

impl ProfileSelector for EnvOverride {
    fn select(&self, profiles: &mut [KernelProfile]) {
        if let Some(value) = Self::value() {
            mark(profiles, &value);
        }
    }

    // An unknown value is reported and the remaining rules decide
    fn is_applicable(&self) -> bool {
        match Self::value() {
            Some(value) if Self::VALUES.contains(&value.as_str()) => true,
            Some(value) => {
                println!("cargo:warning=unknown TINYDSP_BACKEND `{value}`, expected scalar or packed");
                false
            }
            None => false,
        }
    }
}

struct ForceScalarFeature;
impl ProfileSelector for ForceScalarFeature {
    fn select(&self, profiles: &mut [KernelProfile]) {
        mark(profiles, "scalar");
    }

    fn is_applicable(&self) -> bool {
        env::var("CARGO_FEATURE_FORCE_SCALAR").is_ok()
    }
}

// Cores without the packed halfword instructions (Cortex-M0/M0+/M1, ARMv8-M baseline)
struct TargetDetector;
impl TargetDetector {
    const SCALAR_ONLY_TARGETS: &'static [&'static str] = &["thumbv6m", "thumbv8m.base"];
}

impl ProfileSelector for TargetDetector {
    fn select(&self, profiles: &mut [KernelProfile]) {
        let target = env::var("TARGET").unwrap_or_default();

        if Self::SCALAR_ONLY_TARGETS
            .iter()
            .any(|prefix| target.starts_with(prefix))
        {
            mark(profiles, "scalar");
        } else {
            mark(profiles, "packed");
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

struct ProfileResolver;
impl ProfileResolver {
    fn selectors() -> Vec<Box<dyn ProfileSelector>> {
        vec![
            Box::new(EnvOverride),
            Box::new(ForceScalarFeature),
            Box::new(TargetDetector),
        ]
    }

    fn resolve(profiles: &mut [KernelProfile]) {
        // First applicable selector decides
        for selector in Self::selectors() {
            if selector.is_applicable() {
                selector.select(profiles);
                break;
            }
        }
    }

    fn apply(profiles: &mut [KernelProfile]) {
        profiles.sort();

        let cfg_flag = profiles
            .iter()
            .find(|profile| profile.selected)
            .map(|profile| profile.cfg_flag)
            .unwrap_or("tinydsp_scalar");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(tinydsp_packed)");
        println!("cargo::rustc-check-cfg=cfg(tinydsp_scalar)");
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=TINYDSP_BACKEND");
    println!("cargo:rerun-if-changed=build.rs");

    let mut profiles = KernelProfile::profiles();

    ProfileResolver::resolve(&mut profiles);
    ProfileResolver::apply(&mut profiles);
}
