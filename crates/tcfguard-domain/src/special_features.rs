//! Special feature 1: use precise geolocation data.

use crate::consent::ConsentRecord;
use crate::model::{EnforcementFlag, VendorPermission};
use crate::policy::SpecialFeatureConfig;

pub const PRECISE_GEOLOCATION: u8 = 1;

/// Owns `mask_precise_geo`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreciseGeolocationStrategy;

impl PreciseGeolocationStrategy {
    /// Unmask geolocation for exempted vendors, and for everyone else when the user opted in or
    /// enforcement is off. Returns the whole input slice.
    pub fn process<'p>(
        &self,
        consent: Option<&dyn ConsentRecord>,
        config: &SpecialFeatureConfig,
        permissions: &'p mut [VendorPermission],
    ) -> &'p mut [VendorPermission] {
        let opted_in = consent.is_some_and(|c| c.has_special_feature_opt_in(PRECISE_GEOLOCATION));

        for permission in permissions.iter_mut() {
            let exempt = config.vendor_exceptions.contains(permission.bidder_name());
            if !config.enforce || exempt || opted_in {
                permission
                    .action_mut()
                    .permit(EnforcementFlag::MaskPreciseGeo);
            }
        }

        tracing::debug!(
            enforce = config.enforce,
            opted_in,
            total = permissions.len(),
            "special feature 1 evaluated"
        );

        permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::DecodedConsent;
    use crate::test_support::permissions;

    fn opt_in() -> DecodedConsent {
        DecodedConsent {
            special_feature_opt_ins: [PRECISE_GEOLOCATION].into_iter().collect(),
            ..DecodedConsent::default()
        }
    }

    #[test]
    fn masks_without_opt_in() {
        let mut perms = permissions(&[("a", Some(1))]);
        PreciseGeolocationStrategy.process(
            Some(&DecodedConsent::default()),
            &SpecialFeatureConfig::default(),
            &mut perms,
        );
        assert!(perms[0].action().mask_precise_geo);
    }

    #[test]
    fn opt_in_unmasks_everyone() {
        let mut perms = permissions(&[("a", Some(1)), ("b", None)]);
        PreciseGeolocationStrategy.process(
            Some(&opt_in()),
            &SpecialFeatureConfig::default(),
            &mut perms,
        );
        assert!(perms.iter().all(|p| !p.action().mask_precise_geo));
    }

    #[test]
    fn disabled_enforcement_unmasks_without_consent() {
        let mut perms = permissions(&[("a", Some(1))]);
        let cfg = SpecialFeatureConfig {
            enforce: false,
            ..SpecialFeatureConfig::default()
        };
        PreciseGeolocationStrategy.process(None, &cfg, &mut perms);
        assert!(!perms[0].action().mask_precise_geo);
    }

    #[test]
    fn exception_unmasks_only_that_vendor() {
        let mut perms = permissions(&[("exempt", Some(1)), ("other", Some(2))]);
        let mut cfg = SpecialFeatureConfig::default();
        cfg.vendor_exceptions.insert("exempt".to_string());

        let out = PreciseGeolocationStrategy.process(None, &cfg, &mut perms);
        assert_eq!(out.len(), 2);
        assert!(!out[0].action().mask_precise_geo);
        assert!(out[1].action().mask_precise_geo);
        assert!(out[0].action().block_bidder_request);
    }
}
