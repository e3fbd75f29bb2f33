//! Explain registry for purposes, flags and codes.
//!
//! Maps purpose keys (`p1`..`p10`, `sf1`), flag names and finding codes to human-readable
//! explanations with configuration guidance.

use crate::ids;

/// Explanation entry for a purpose, flag or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description.
    pub title: &'static str,
    /// What is governed and how the decision is made.
    pub description: &'static str,
    /// What to change in configuration.
    pub remediation: &'static str,
    /// Before/after configuration examples.
    pub examples: ExamplePair,
}

/// Before and after `tcfguard.toml` snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    pub before: &'static str,
    pub after: &'static str,
}

/// Look up an explanation by purpose key, flag name or code.
///
/// Flags resolve to the explanation of the purpose that owns them.
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        "p1" | ids::FLAG_BLOCK_PIXEL_SYNC => Some(explain_purpose_one()),
        "p2" | ids::FLAG_BLOCK_BIDDER_REQUEST => Some(explain_purpose_two()),
        "p3" | ids::FLAG_BLOCK_ADS_PROFILE => Some(explain_profile_purpose(
            "Purpose 3: Create a personalised ads profile",
        )),
        "p4" | ids::FLAG_REMOVE_USER_BUYER_UID => Some(explain_purpose_four()),
        "p5" | ids::FLAG_BLOCK_CONTENT_PROFILE => Some(explain_profile_purpose(
            "Purpose 5: Create a personalised content profile",
        )),
        "p6" | ids::FLAG_BLOCK_PERSONALIZED_CONTENT => Some(explain_profile_purpose(
            "Purpose 6: Select personalised content",
        )),
        "p7" | ids::FLAG_BLOCK_ANALYTICS_REPORT => Some(explain_purpose_seven()),
        "p8" | ids::FLAG_BLOCK_CONTENT_MEASUREMENT => Some(explain_profile_purpose(
            "Purpose 8: Measure content performance",
        )),
        "p9" | ids::FLAG_BLOCK_MARKET_RESEARCH => Some(explain_profile_purpose(
            "Purpose 9: Apply market research to generate audience insights",
        )),
        "p10" | ids::FLAG_BLOCK_PRODUCT_DEVELOPMENT => Some(explain_profile_purpose(
            "Purpose 10: Develop and improve products",
        )),
        ids::SPECIAL_FEATURE_PRECISE_GEO | ids::FLAG_MASK_PRECISE_GEO => {
            Some(explain_precise_geo())
        }

        ids::CODE_UNSUPPORTED_ENFORCEMENT_MODE => Some(explain_unsupported_mode()),
        ids::CODE_FULL_ENFORCEMENT_UNSUPPORTED => Some(explain_full_unsupported()),
        ids::CODE_UNKNOWN_PURPOSE => Some(explain_unknown_purpose()),

        _ => None,
    }
}

/// List all purpose and special-feature keys.
pub fn all_purpose_keys() -> &'static [&'static str] {
    &[
        "p1",
        "p2",
        "p3",
        "p4",
        "p5",
        "p6",
        "p7",
        "p8",
        "p9",
        "p10",
        ids::SPECIAL_FEATURE_PRECISE_GEO,
    ]
}

/// List all flag names.
pub fn all_flags() -> &'static [&'static str] {
    &[
        ids::FLAG_BLOCK_PIXEL_SYNC,
        ids::FLAG_BLOCK_BIDDER_REQUEST,
        ids::FLAG_BLOCK_ADS_PROFILE,
        ids::FLAG_REMOVE_USER_BUYER_UID,
        ids::FLAG_BLOCK_CONTENT_PROFILE,
        ids::FLAG_BLOCK_PERSONALIZED_CONTENT,
        ids::FLAG_BLOCK_ANALYTICS_REPORT,
        ids::FLAG_BLOCK_CONTENT_MEASUREMENT,
        ids::FLAG_BLOCK_MARKET_RESEARCH,
        ids::FLAG_BLOCK_PRODUCT_DEVELOPMENT,
        ids::FLAG_MASK_PRECISE_GEO,
    ]
}

/// List all finding codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UNSUPPORTED_ENFORCEMENT_MODE,
        ids::CODE_FULL_ENFORCEMENT_UNSUPPORTED,
        ids::CODE_UNKNOWN_PURPOSE,
    ]
}

// --- Purpose-level explanations ---

fn explain_purpose_one() -> Explanation {
    Explanation {
        title: "Purpose 1: Store and/or access information on a device",
        description: "\
Governs `block_pixel_sync`. While the flag is set the bidder may not run a cookie or pixel sync.

Supported modes: `no`, `basic`. Full enforcement is not available for this purpose; requesting it
fails the purpose with `full_enforcement_unsupported` and the flag stays blocked.",
        remediation: "\
Use `basic` (the default) or `no`. To exempt a bidder regardless of consent, list it under
`vendor_exceptions`.",
        examples: ExamplePair {
            before: "\
[purposes.p1]
enforce_purpose = \"full\"",
            after: "\
[purposes.p1]
enforce_purpose = \"basic\"
vendor_exceptions = [\"rubicon\"]",
        },
    }
}

fn explain_purpose_two() -> Explanation {
    Explanation {
        title: "Purpose 2: Select basic ads",
        description: "\
Governs `block_bidder_request`. While the flag is set the bidder does not receive a bid request
at all.

Supported modes: `no`, `basic`. Full enforcement is not available for this purpose.",
        remediation: "\
Use `basic` (the default) or `no`. Exempted bidders always receive requests.",
        examples: ExamplePair {
            before: "\
[purposes.p2]
enforce_purpose = \"full\"",
            after: "\
[purposes.p2]
enforce_purpose = \"basic\"
enforce_vendors = true",
        },
    }
}

fn explain_purpose_four() -> Explanation {
    Explanation {
        title: "Purpose 4: Select personalised ads",
        description: "\
Governs `remove_user_buyer_uid`. While the flag is set the user's buyer id is stripped before the
request is sent to the bidder.

Supported modes: `no`, `basic`, `full`. Full enforcement also checks the legal basis the vendor
declared in the vendor list and any publisher restriction in the consent record.",
        remediation: "\
Pick `full` when a vendor list is available. Without one, full enforcement rejects every vendor
that is not exempted.",
        examples: ExamplePair {
            before: "\
[purposes.p4]
enforce_purpose = \"no\"
enforce_vendors = false",
            after: "\
[purposes.p4]
enforce_purpose = \"full\"",
        },
    }
}

fn explain_purpose_seven() -> Explanation {
    Explanation {
        title: "Purpose 7: Measure ad performance",
        description: "\
Governs `block_analytics_report`. While the flag is set no analytics or measurement report is
emitted for the bidder.

Supported modes: `no`, `basic`. Full enforcement is not available for this purpose.",
        remediation: "\
Use `basic` (the default) or `no`.",
        examples: ExamplePair {
            before: "\
[purposes.p7]
enforce_purpose = \"full\"",
            after: "\
[purposes.p7]
enforce_purpose = \"basic\"",
        },
    }
}

fn explain_profile_purpose(title: &'static str) -> Explanation {
    Explanation {
        title,
        description: "\
Clears its single owned flag for every bidder judged compliant. Supports `no`, `basic` and
`full`. Full enforcement checks the vendor's declared legal basis (consent or legitimate
interest, switchable for flexible purposes) and publisher restrictions.",
        remediation: "\
Choose the mode per account under `[purposes.pN]`. Exempted bidders are always permitted.",
        examples: ExamplePair {
            before: "\
[purposes.p3]
enforce_purpose = \"no\"",
            after: "\
[purposes.p3]
enforce_purpose = \"full\"
enforce_vendors = true",
        },
    }
}

fn explain_precise_geo() -> Explanation {
    Explanation {
        title: "Special feature 1: Use precise geolocation data",
        description: "\
Governs `mask_precise_geo`. While the flag is set, precise geolocation is masked before the request
is sent. The flag is cleared when the user opted in to special feature 1, when enforcement is
disabled, or for exempted bidders.",
        remediation: "\
Set `enforce = false` only when geolocation is never forwarded at full precision.",
        examples: ExamplePair {
            before: "\
[special_features.sf1]
enforce = true",
            after: "\
[special_features.sf1]
enforce = true
vendor_exceptions = [\"appnexus\"]",
        },
    }
}

// --- Code-level explanations ---

fn explain_unsupported_mode() -> Explanation {
    Explanation {
        title: "Unsupported enforcement mode",
        description: "\
`enforce_purpose` must be one of `full`, `basic` or `no`. Any other value is rejected when the
configuration is resolved; the engine never guesses a replacement mode.",
        remediation: "\
Fix the spelling of the mode. Omit the key to fall back to `basic`.",
        examples: ExamplePair {
            before: "\
[purposes.p2]
enforce_purpose = \"strict\"",
            after: "\
[purposes.p2]
enforce_purpose = \"basic\"",
        },
    }
}

fn explain_full_unsupported() -> Explanation {
    Explanation {
        title: "Full enforcement unsupported for purpose",
        description: "\
Full enforcement was requested for a purpose that only supports `no` and `basic` (purposes 1, 2
and 7). The purpose is not evaluated and its flag stays blocked for every bidder; other purposes
are unaffected. There is no silent fallback to `basic`.",
        remediation: "\
Configure `basic` or `no` for the purpose.",
        examples: ExamplePair {
            before: "\
[purposes.p7]
enforce_purpose = \"full\"",
            after: "\
[purposes.p7]
enforce_purpose = \"basic\"",
        },
    }
}

fn explain_unknown_purpose() -> Explanation {
    Explanation {
        title: "Unknown purpose",
        description: "\
TCF v2 defines purposes 1 through 10. Purpose keys outside `p1`..`p10` are rejected.",
        remediation: "\
Remove or rename the offending `[purposes.*]` table.",
        examples: ExamplePair {
            before: "\
[purposes.p11]
enforce_purpose = \"basic\"",
            after: "\
[purposes.p10]
enforce_purpose = \"basic\"",
        },
    }
}
