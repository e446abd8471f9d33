use approx::assert_relative_eq;
use proptest::prelude::*;

use blndr::{
    models::blending::{FillGas, FillPlan, FillRequest, FillStep, PlanError, Vessel, plan_fill},
    support::{
        gas::{
            GasMix, GasMixError,
            presets::{AIR, EAN32, EAN40, HELIUM, OXYGEN},
        },
        units::{bar, celsius, in_bar, liters},
    },
};

fn lines(plan: &FillPlan) -> Vec<String> {
    plan.steps().iter().map(|s| s.step.to_string()).collect()
}

#[test]
fn oxygen_cylinder_to_trimix_20_15() {
    let target = GasMix::new(0.20, 0.15).unwrap();
    let request = FillRequest::new(target)
        .with_initial(OXYGEN, bar(50.0))
        .with_vessel(Vessel::new(liters(10.0), celsius(20.0)));

    let plan = plan_fill(&request).unwrap();

    assert_eq!(
        plan.to_string(),
        " 1. [BLEED] to 5.55 bar\n 2. [FILL] with He up to 35.55 bar\n 3. [TOP-UP] to 200.00bar\n"
    );

    let [bleed, helium, top_up] = plan.steps() else {
        panic!("expected three steps, got {:?}", plan.steps());
    };
    assert!(matches!(bleed.step, FillStep::Bleed { .. }));
    assert_eq!(bleed.mix, OXYGEN);
    assert!(matches!(helium.step, FillStep::Fill { gas: FillGas::He, .. }));
    assert!(matches!(top_up.step, FillStep::TopUp { .. }));

    assert_relative_eq!(plan.final_mix().o2(), 0.20, epsilon = 1e-9);
    assert_relative_eq!(plan.final_mix().he(), 0.15, epsilon = 1e-9);
}

#[test]
fn nitrox_from_an_empty_cylinder() {
    let plan = plan_fill(&FillRequest::new(EAN32)).unwrap();

    assert_eq!(
        lines(&plan),
        ["[FILL] with O2 up to 27.96 bar", "[TOP-UP] to 200.00bar"]
    );
}

#[test]
fn trimix_top_off_without_bleeding() {
    let request = FillRequest::new(GasMix::new(0.21, 0.35).unwrap())
        .with_initial(GasMix::new(0.18, 0.45).unwrap(), bar(100.0));

    let plan = plan_fill(&request).unwrap();

    assert_eq!(
        lines(&plan),
        [
            "[FILL] with O2 up to 110.48 bar",
            "[FILL] with He up to 135.48 bar",
            "[TOP-UP] to 200.00bar",
        ]
    );
}

#[test]
fn helium_left_in_a_nitrox_cylinder_forces_a_full_bleed() {
    let request =
        FillRequest::new(EAN32).with_initial(GasMix::new(0.21, 0.35).unwrap(), bar(80.0));

    let plan = plan_fill(&request).unwrap();

    assert_eq!(
        lines(&plan),
        [
            "[BLEED] to 0.00 bar",
            "[FILL] with O2 up to 27.96 bar",
            "[TOP-UP] to 200.00bar",
        ]
    );
}

#[test]
fn richer_nitrox_cannot_be_diluted_with_air_alone() {
    let request = FillRequest::new(EAN32).with_initial(EAN40, bar(150.0));

    let err = plan_fill(&request).unwrap_err();
    assert!(matches!(err, PlanError::InfeasibleBlend { .. }));
    assert_eq!(
        err.to_string(),
        format!("unable to blend {EAN32} using the available gases")
    );
}

#[test]
fn nitrogen_free_top_up_cannot_make_nitrox() {
    let request = FillRequest::new(EAN32).with_top_up(OXYGEN);

    let err = plan_fill(&request).unwrap_err();
    assert!(matches!(err, PlanError::NoNitrogenSource { top_up, .. } if top_up == OXYGEN));
    assert_eq!(
        err.to_string(),
        "a source of N2 (top-up gas) is required for this mix"
    );
}

#[test]
fn hypoxic_nitrox_from_air_is_rejected() {
    let request =
        FillRequest::new(GasMix::new(0.10, 0.0).unwrap()).with_initial(AIR, bar(100.0));

    assert!(matches!(
        plan_fill(&request),
        Err(PlanError::PreconditionViolation { .. })
    ));
}

#[test]
fn heliox_topped_up_with_helium() {
    let request = FillRequest::new(GasMix::new(0.21, 0.79).unwrap()).with_top_up(HELIUM);

    let plan = plan_fill(&request).unwrap();

    assert_eq!(
        lines(&plan),
        [
            "[FILL] with O2 up to 42.00 bar",
            "[FILL] with He up to 200.00 bar",
            "[TOP-UP] to 200.00bar",
        ]
    );
}

#[test]
fn heliox_with_no_nitrogen_balance_plans_from_either_end() {
    let heliox = GasMix::new(0.32, 0.68).unwrap();
    assert!(heliox.n2() >= 0.0);

    let from_heliox = FillRequest::new(GasMix::new(0.21, 0.35).unwrap())
        .with_initial(heliox, bar(100.0));
    let plan = plan_fill(&from_heliox).unwrap();
    assert!(plan.contents().is_physical());
    assert_eq!(lines(&plan)[0], "[BLEED] to 58.37 bar");

    let to_heliox = FillRequest::new(heliox).with_top_up(HELIUM);
    let plan = plan_fill(&to_heliox).unwrap();
    assert!(plan.contents().is_physical());
    assert_eq!(
        lines(&plan),
        [
            "[FILL] with O2 up to 64.00 bar",
            "[FILL] with He up to 200.00 bar",
            "[TOP-UP] to 200.00bar",
        ]
    );
}

#[test]
fn invalid_mixture_is_rejected_before_planning() {
    assert!(matches!(
        GasMix::new(0.5, 0.6),
        Err(GasMixError::InvalidComposition { .. })
    ));
    assert!(matches!(
        FillRequest::from_fractions(0.5, 0.6),
        Err(PlanError::InvalidComposition(_))
    ));
}

/// Errors that a valid request may legitimately end in.
fn is_blend_limit(err: &PlanError) -> bool {
    matches!(
        err,
        PlanError::InfeasibleBlend { .. }
            | PlanError::NoNitrogenSource { .. }
            | PlanError::PreconditionViolation { .. }
    )
}

fn mix() -> impl Strategy<Value = GasMix> {
    (0.0..=1.0_f64, 0.0..=0.99_f64).prop_map(|(o2, he_share)| {
        GasMix::new(o2, he_share * (1.0 - o2)).expect("fractions sum to at most one")
    })
}

fn breathable() -> impl Strategy<Value = GasMix> {
    (0.21..=0.6_f64, 0.0..=0.99_f64).prop_map(|(o2, he_share)| {
        GasMix::new(o2, he_share * (1.0 - o2)).expect("fractions sum to at most one")
    })
}

proptest! {
    #[test]
    fn empty_cylinder_reaches_any_breathable_target(
        target in breathable(),
        target_bar in 50.0..300.0_f64,
    ) {
        let request = FillRequest::new(target).with_target_pressure(bar(target_bar));
        let plan = plan_fill(&request).unwrap();

        let final_mix = plan.final_mix();
        prop_assert!((final_mix.o2() - target.o2()).abs() < 1e-9);
        prop_assert!((final_mix.he() - target.he()).abs() < 1e-9);
        prop_assert!((in_bar(plan.final_pressure()) - target_bar).abs() < 1e-6 * target_bar);
    }

    #[test]
    fn successful_plans_hit_the_target(
        target in breathable(),
        initial in mix(),
        initial_bar in 0.0..250.0_f64,
        target_bar in 50.0..300.0_f64,
    ) {
        let request = FillRequest::new(target)
            .with_target_pressure(bar(target_bar))
            .with_initial(initial, bar(initial_bar));

        let plan = match plan_fill(&request) {
            Ok(plan) => plan,
            Err(err) => {
                prop_assert!(is_blend_limit(&err), "unexpected error: {err:?}");
                return Ok(());
            }
        };

        let final_mix = plan.final_mix();
        prop_assert!((final_mix.o2() - target.o2()).abs() < 1e-6);
        prop_assert!((final_mix.he() - target.he()).abs() < 1e-6);
        prop_assert!((in_bar(plan.final_pressure()) - target_bar).abs() < 1e-6 * target_bar);
        prop_assert!(plan.contents().is_physical());
    }

    #[test]
    fn bleeds_stay_between_empty_and_start(
        target in breathable(),
        initial in mix(),
        initial_bar in 0.0..250.0_f64,
    ) {
        let request = FillRequest::new(target).with_initial(initial, bar(initial_bar));

        let plan = match plan_fill(&request) {
            Ok(plan) => plan,
            Err(err) => {
                prop_assert!(is_blend_limit(&err), "unexpected error: {err:?}");
                return Ok(());
            }
        };

        for planned in plan.steps() {
            if let FillStep::Bleed { to } = planned.step {
                prop_assert!(in_bar(to) >= 0.0);
                prop_assert!(in_bar(to) < initial_bar);
            }
        }
        let pressures: Vec<f64> = plan.steps().iter().map(|s| in_bar(s.step.pressure())).collect();
        prop_assert!(pressures.windows(2).all(|w| w[1] >= w[0] - 1e-9));
    }
}
