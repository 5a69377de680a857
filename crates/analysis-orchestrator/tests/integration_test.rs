use analysis_core::{
    BalanceSheet, Bar, CashflowStatement, CompanyDataset, CompanyProfile, DividendPayment,
    IncomeStatement,
};
use analysis_orchestrator::{render_report, StockAnalyzer};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap()
}

fn payment(year: i32, month: u32, amount: f64) -> DividendPayment {
    DividendPayment {
        date: Utc.with_ymd_and_hms(year, month, 10, 0, 0, 0).unwrap(),
        amount,
    }
}

fn bars(count: usize) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let close = 100.0 + (i % 10) as f64;
            Bar {
                timestamp: start + Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000_000.0,
            }
        })
        .collect()
}

/// Healthy Technology dividend payer with every metric at a strong tier
fn healthy_dataset() -> CompanyDataset {
    CompanyDataset {
        profile: CompanyProfile {
            symbol: "HLTH".to_string(),
            name: Some("Healthy Corp".to_string()),
            sector: "Technology".to_string(),
            current_price: 100.0,
            summary: Some("A steadily compounding maker of boring machines.".to_string()),
            trailing_pe: Some(15.0),
            price_to_book: Some(3.0),
            debt_to_equity: Some(40.0),
            return_on_equity: Some(0.20),
            payout_ratio: Some(0.3),
            revenue_growth: Some(0.06),
        },
        // Below the 26-bar floor on purpose: the technical judge must pin
        // to its neutral 50 so the composite stays hand-checkable.
        price_history: bars(20),
        dividends: vec![
            payment(2026, 3, 1.20),
            payment(2025, 9, 1.00),
            payment(2025, 3, 0.4641),
            payment(2024, 3, 1.331),
            payment(2023, 3, 1.21),
            payment(2022, 3, 1.10),
            payment(2021, 3, 1.00),
            payment(2020, 3, 1.00),
        ],
        income: vec![
            IncomeStatement {
                net_income: Some(50.0),
                total_revenue: Some(500.0),
            },
            IncomeStatement {
                net_income: Some(45.0),
                total_revenue: Some(450.0),
            },
            IncomeStatement {
                net_income: Some(40.0),
                total_revenue: Some(420.0),
            },
            IncomeStatement {
                net_income: Some(35.0),
                total_revenue: Some(400.0),
            },
        ],
        cashflow: vec![
            CashflowStatement {
                operating_cash_flow: Some(60.0),
                capital_expenditures: Some(20.0),
            },
            CashflowStatement {
                operating_cash_flow: Some(55.0),
                capital_expenditures: Some(18.0),
            },
            CashflowStatement {
                operating_cash_flow: Some(50.0),
                capital_expenditures: Some(16.0),
            },
            CashflowStatement {
                operating_cash_flow: Some(45.0),
                capital_expenditures: Some(14.0),
            },
        ],
        balance: vec![
            BalanceSheet {
                total_equity: Some(250.0),
                total_liabilities: Some(100.0),
            },
            BalanceSheet {
                total_equity: Some(240.0),
                total_liabilities: Some(105.0),
            },
            BalanceSheet {
                total_equity: Some(230.0),
                total_liabilities: Some(110.0),
            },
            BalanceSheet {
                total_equity: Some(220.0),
                total_liabilities: Some(120.0),
            },
        ],
    }
}

#[test]
fn healthy_payer_scores_without_penalties() {
    let analysis = StockAnalyzer::new().analyze_at(&healthy_dataset(), as_of());

    // Fundamental: every metric lands in its best tier for Technology.
    assert_eq!(analysis.fundamental.score, 100.0);
    // Seven consecutive paying years (2020..=2026).
    assert_eq!(analysis.trends.consecutive_dividend_years, 7);
    assert_eq!(analysis.dividend_consistency.score, 75.0);
    // Trailing yield: 1.00 + 1.20 paid inside the last 365 days.
    let yield_pct = analysis.dividend_yield_pct.unwrap();
    assert!((yield_pct - 2.2).abs() < 1e-9);
    assert!((analysis.dividend_yield.score - 44.0).abs() < 1e-9);
    // Dividend CAGR window 2021..=2025: 1.00 -> 1.4641 over 4 years = 10%.
    assert!((analysis.dividend_growth_pct.unwrap() - 10.0).abs() < 1e-6);
    assert_eq!(analysis.dividend_growth.score, 100.0);
    assert_eq!(analysis.revenue_growth.score, 100.0);
    assert_eq!(analysis.management_confidence.score, 50.0);
    // 20 bars is below the indicator floor.
    assert!(analysis.indicators.is_none());
    assert_eq!(analysis.technical.score, 50.0);

    // 0.35*100 + 0.20*75 + 0.15*44 + 0.10*100 + 0.10*100 + 0.05*50 + 0.05*50
    assert!((analysis.base_probability - 81.6).abs() < 1e-9);
    assert_eq!(analysis.penalty_factor, 1.0);
    assert!(analysis.penalties.is_empty());
    assert!((analysis.adjusted_probability - analysis.base_probability).abs() < 1e-12);
}

#[test]
fn chronic_losses_trigger_only_the_earnings_penalty() {
    let mut ds = healthy_dataset();
    ds.profile.symbol = "LOSS".to_string();
    // Three loss years, but the window average ROE stays above 10% and
    // revenue keeps growing, so only the earnings rule fires.
    ds.dividends.clear();
    ds.income = vec![
        IncomeStatement {
            net_income: Some(-1.0),
            total_revenue: Some(500.0),
        },
        IncomeStatement {
            net_income: Some(-1.0),
            total_revenue: Some(450.0),
        },
        IncomeStatement {
            net_income: Some(-1.0),
            total_revenue: Some(420.0),
        },
        IncomeStatement {
            net_income: Some(200.0),
            total_revenue: Some(400.0),
        },
    ];
    for column in &mut ds.balance {
        column.total_equity = Some(100.0);
    }

    let analysis = StockAnalyzer::new().analyze_at(&ds, as_of());

    assert_eq!(analysis.trends.loss_years, 3);
    assert!(analysis.trends.avg_roe.unwrap() >= 0.10);
    assert_eq!(analysis.penalties.len(), 1);
    assert_eq!(analysis.penalties[0].label, "Earnings");
    assert!((analysis.penalty_factor - 0.80).abs() < 1e-12);
    assert!(
        (analysis.adjusted_probability - analysis.base_probability * 0.80).abs() < 1e-9
    );
}

#[test]
fn missing_statements_degrade_without_failing() {
    let mut ds = healthy_dataset();
    ds.income.clear();

    let analysis = StockAnalyzer::new().analyze_at(&ds, as_of());

    // Empty trends: no streak, no penalties, factor exactly 1.0.
    assert_eq!(analysis.trends.consecutive_dividend_years, 0);
    assert_eq!(analysis.dividend_consistency.score, 0.0);
    assert_eq!(analysis.penalty_factor, 1.0);
    assert!(analysis.penalties.is_empty());
    // The profile-driven judges are untouched by the degradation.
    assert_eq!(analysis.fundamental.score, 100.0);
}

#[test]
fn every_judge_score_stays_in_range() {
    let mut ds = healthy_dataset();
    // Strip everything optional.
    ds.profile.trailing_pe = None;
    ds.profile.price_to_book = None;
    ds.profile.debt_to_equity = None;
    ds.profile.return_on_equity = None;
    ds.profile.payout_ratio = None;
    ds.profile.revenue_growth = None;
    ds.dividends.clear();
    ds.price_history.clear();

    let analysis = StockAnalyzer::new().analyze_at(&ds, as_of());
    for judge in [
        &analysis.fundamental,
        &analysis.technical,
        &analysis.dividend_consistency,
        &analysis.dividend_yield,
        &analysis.dividend_growth,
        &analysis.revenue_growth,
        &analysis.management_confidence,
    ] {
        assert!((0.0..=100.0).contains(&judge.score));
        assert!(!judge.reasons.is_empty());
    }
    assert!((0.0..=100.0).contains(&analysis.base_probability));
    assert!(analysis.adjusted_probability <= analysis.base_probability);
}

#[test]
fn report_renders_all_sections() {
    let ds = healthy_dataset();
    let analysis = StockAnalyzer::new().analyze_at(&ds, as_of());
    let report = render_report(&ds.profile, &analysis);

    assert!(report.contains("ANALYSIS REPORT FOR: Healthy Corp (HLTH)"));
    assert!(report.contains("Sector: Technology | Current Price: $100.00"));
    assert!(report.contains("OVERALL SCORE: 81.60 / 100.00"));
    assert!(report.contains("SCORE BREAKDOWN"));
    assert!(report.contains("(Weight: 35%)"));
    assert!(report.contains("boring machines"));
    // No penalties applied: the base/adjusted line is omitted.
    assert!(!report.contains("adjusted by a factor"));
}

#[test]
fn report_lists_applied_penalties() {
    let mut ds = healthy_dataset();
    ds.income[0].net_income = Some(-5.0);
    ds.income[1].net_income = Some(-5.0);
    ds.income[2].net_income = Some(400.0);

    let analysis = StockAnalyzer::new().analyze_at(&ds, as_of());
    assert!((analysis.penalty_factor - 0.80).abs() < 1e-12);

    let report = render_report(&ds.profile, &analysis);
    assert!(report.contains("adjusted by a factor of x0.80"));
    assert!(report.contains("Net losses in 2 or more of the last 5 years"));
}

#[test]
fn dataset_round_trips_through_json() {
    let ds = healthy_dataset();
    let encoded = serde_json::to_string(&ds).unwrap();
    let decoded: CompanyDataset = serde_json::from_str(&encoded).unwrap();

    let a = StockAnalyzer::new().analyze_at(&ds, as_of());
    let b = StockAnalyzer::new().analyze_at(&decoded, as_of());
    assert_eq!(a.base_probability, b.base_probability);
    assert_eq!(a.penalty_factor, b.penalty_factor);
    assert_eq!(a.adjusted_probability, b.adjusted_probability);
}
