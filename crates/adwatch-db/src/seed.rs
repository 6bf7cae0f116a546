//! Demo-data seeding: three funding organizations, fourteen ad placements,
//! and a week of sync history.

use chrono::{TimeZone, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use adwatch_core::{Funder, Platform, SyncStatus};

use crate::DbError;

struct DemoAd {
    title: &'static str,
    description: &'static str,
    platform: Platform,
    super_pac: usize,
    amount: i64,
    target_audience: &'static str,
    geographic_target: &'static str,
    start: (i32, u32, u32),
    impressions: Option<i64>,
    ad_url: &'static str,
    metadata: serde_json::Value,
}

struct DemoSuperPac {
    name: &'static str,
    funder: Funder,
    description: &'static str,
}

const DEMO_SUPER_PACS: [DemoSuperPac; 3] = [
    DemoSuperPac {
        name: "Leading the Future",
        funder: Funder::OpenAiA16z,
        description: "Super PAC funded by OpenAI and Andreessen Horowitz focusing on AI innovation and technology leadership",
    },
    DemoSuperPac {
        name: "American Technology Excellence Project",
        funder: Funder::Meta,
        description: "Meta-funded Super PAC advocating for technology policy and digital innovation",
    },
    DemoSuperPac {
        name: "Mobilising Economic Transformation Across America",
        funder: Funder::Meta,
        description: "Meta-funded Super PAC focused on economic transformation through technology",
    },
];

#[allow(clippy::too_many_lines)]
fn demo_ads() -> Vec<DemoAd> {
    vec![
        DemoAd {
            title: "AI Innovation for American Leadership",
            description: "Promoting AI development and American technological leadership in the global landscape",
            platform: Platform::Facebook,
            super_pac: 0,
            amount: 750_000,
            target_audience: "Tech professionals, entrepreneurs, voters 25-45",
            geographic_target: "National",
            start: (2024, 1, 15),
            impressions: Some(3_500_000),
            ad_url: "https://facebook.com/ads/ai-innovation-leadership",
            metadata: json!({
                "reach": "national",
                "engagement": "high",
                "demographics": ["25-45", "tech_professionals", "college_educated"],
                "ad_type": "video",
                "duration_seconds": 30
            }),
        },
        DemoAd {
            title: "The Future is AI - Invest in American Talent",
            description: "Supporting AI education and workforce development programs nationwide",
            platform: Platform::Youtube,
            super_pac: 0,
            amount: 500_000,
            target_audience: "Educators, students, young professionals 18-35",
            geographic_target: "Tech hubs (CA, NY, MA, TX)",
            start: (2024, 2, 1),
            impressions: Some(2_800_000),
            ad_url: "https://youtube.com/ads/future-ai-talent",
            metadata: json!({
                "views": "high",
                "retention": "medium",
                "target_regions": ["California", "New York", "Massachusetts", "Texas"],
                "video_length": "2:15",
                "ctr": "4.2%"
            }),
        },
        DemoAd {
            title: "Protecting American AI Sovereignty",
            description: "Advocating for policies that protect US AI research and development",
            platform: Platform::Fec,
            super_pac: 0,
            amount: 1_200_000,
            target_audience: "Policymakers, government officials, industry leaders",
            geographic_target: "Washington DC",
            start: (2024, 1, 20),
            impressions: None,
            ad_url: "https://fec.gov/ads/ai-sovereignty",
            metadata: json!({
                "filing_type": "independent_expenditure",
                "committee_id": "C00793258",
                "purpose": "issue_advocacy",
                "legislation_mentioned": ["AI Innovation Act", "Tech Competitiveness Bill"]
            }),
        },
        DemoAd {
            title: "OpenAI: Building the Next Generation of AI",
            description: "Showcasing OpenAI research and development achievements",
            platform: Platform::Opensecrets,
            super_pac: 0,
            amount: 300_000,
            target_audience: "Policy analysts, researchers, academic community",
            geographic_target: "National",
            start: (2024, 2, 10),
            impressions: None,
            ad_url: "https://opensecrets.org/ads/openai-next-gen",
            metadata: json!({
                "data_source": "FEC filings",
                "transparency_score": "95%",
                "related_committees": ["Leading the Future PAC"]
            }),
        },
        DemoAd {
            title: "Protecting Our Digital Future",
            description: "Ensuring American leadership in emerging technologies",
            platform: Platform::Adimpact,
            super_pac: 0,
            amount: 680_000,
            target_audience: "Tech investors, policymakers, industry analysts",
            geographic_target: "Coastal tech centers",
            start: (2024, 3, 1),
            impressions: Some(2_500_000),
            ad_url: "https://adimpact.com/ads/protecting-digital-future",
            metadata: json!({
                "market_analysis": "comprehensive",
                "swing_voter_targeting": "effective",
                "key_messages": ["innovation", "security", "leadership"]
            }),
        },
        DemoAd {
            title: "Digital Privacy is a Fundamental Right",
            description: "Advocating for strong digital privacy protections and user rights",
            platform: Platform::Facebook,
            super_pac: 1,
            amount: 950_000,
            target_audience: "General population 18+, privacy advocates",
            geographic_target: "Swing states",
            start: (2024, 1, 25),
            impressions: Some(4_200_000),
            ad_url: "https://facebook.com/ads/digital-privacy-rights",
            metadata: json!({
                "reach": "targeted",
                "engagement": "very_high",
                "demographics": ["18-65", "all_education_levels"],
                "issues": ["privacy", "digital_rights", "consumer_protection"]
            }),
        },
        DemoAd {
            title: "Connecting Communities Through Technology",
            description: "Highlighting how Meta platforms connect people and build communities",
            platform: Platform::Youtube,
            super_pac: 1,
            amount: 650_000,
            target_audience: "General population, small businesses, community leaders",
            geographic_target: "National",
            start: (2024, 2, 5),
            impressions: Some(3_100_000),
            ad_url: "https://youtube.com/ads/connecting-communities",
            metadata: json!({
                "video_type": "testimonial",
                "length": "1:45",
                "featured_stories": 3,
                "ctr": "3.8%"
            }),
        },
        DemoAd {
            title: "Supporting Small Business Digital Transformation",
            description: "Advocating for policies that help small businesses adopt digital tools",
            platform: Platform::Adimpact,
            super_pac: 1,
            amount: 450_000,
            target_audience: "Small business owners, entrepreneurs, local chambers",
            geographic_target: "Midwest, Southeast",
            start: (2024, 2, 15),
            impressions: Some(1_800_000),
            ad_url: "https://adimpact.com/ads/small-business-digital",
            metadata: json!({
                "market_impact": "high",
                "competitive_race": "yes",
                "target_districts": ["OH-01", "MI-08", "PA-07", "NC-09"]
            }),
        },
        DemoAd {
            title: "The Future of Digital Innovation",
            description: "Promoting policies that foster innovation and technological advancement",
            platform: Platform::TvAdArchive,
            super_pac: 1,
            amount: 1_800_000,
            target_audience: "General public, evening news viewers",
            geographic_target: "National cable + key markets",
            start: (2024, 1, 30),
            impressions: Some(8_500_000),
            ad_url: "https://archive.org/tv-ads/digital-innovation-future",
            metadata: json!({
                "broadcast_networks": ["CNN", "MSNBC", "Fox News"],
                "air_time": "prime_time",
                "production_quality": "high",
                "estimated_viewers": "8.5M"
            }),
        },
        DemoAd {
            title: "Economic Growth Through Digital Infrastructure",
            description: "Investing in nationwide digital infrastructure development and broadband access",
            platform: Platform::Facebook,
            super_pac: 2,
            amount: 820_000,
            target_audience: "Rural communities, infrastructure advocates, local officials",
            geographic_target: "Rural America",
            start: (2024, 2, 8),
            impressions: Some(2_900_000),
            ad_url: "https://facebook.com/ads/digital-infrastructure-growth",
            metadata: json!({
                "target_demographics": ["rural", "small_town"],
                "key_issues": ["broadband", "infrastructure", "economic_development"],
                "engagement_rate": "5.1%"
            }),
        },
        DemoAd {
            title: "Creating Tech Jobs in Every Community",
            description: "Supporting programs that bring tech education and jobs to underserved areas",
            platform: Platform::Youtube,
            super_pac: 2,
            amount: 550_000,
            target_audience: "Young adults, career changers, community college students",
            geographic_target: "Urban centers, rust belt",
            start: (2024, 2, 12),
            impressions: Some(2_400_000),
            ad_url: "https://youtube.com/ads/tech-jobs-community",
            metadata: json!({
                "success_stories": 5,
                "program_partners": ["Local colleges", "Tech training orgs"],
                "call_to_action": "Learn about tech careers"
            }),
        },
        DemoAd {
            title: "Digital Skills for the 21st Century Economy",
            description: "Advocating for digital literacy and skills training programs",
            platform: Platform::AcluWatch,
            super_pac: 2,
            amount: 320_000,
            target_audience: "Educators, policymakers, workforce development boards",
            geographic_target: "National",
            start: (2024, 2, 18),
            impressions: None,
            ad_url: "https://aclu.org/ads/digital-skills-economy",
            metadata: json!({
                "civil_liberties_focus": "educational_equity",
                "monitoring_category": "education_advocacy",
                "transparency_rating": "excellent"
            }),
        },
        DemoAd {
            title: "Building an Inclusive Digital Economy",
            description: "Promoting diversity and inclusion in the technology sector",
            platform: Platform::Opensecrets,
            super_pac: 2,
            amount: 280_000,
            target_audience: "Diversity advocates, HR professionals, corporate leaders",
            geographic_target: "National",
            start: (2024, 2, 20),
            impressions: None,
            ad_url: "https://opensecrets.org/ads/inclusive-digital-economy",
            metadata: json!({
                "data_coverage": "comprehensive",
                "related_issues": ["workplace_diversity", "tech_equity"],
                "source_validation": "verified"
            }),
        },
        DemoAd {
            title: "The American Tech Renaissance",
            description: "Celebrating American technology innovation and global leadership",
            platform: Platform::TvAdArchive,
            super_pac: 2,
            amount: 1_250_000,
            target_audience: "General public, patriotic audiences",
            geographic_target: "National broadcast",
            start: (2024, 2, 25),
            impressions: Some(6_200_000),
            ad_url: "https://archive.org/tv-ads/tech-renaissance",
            metadata: json!({
                "networks": ["ABC", "CBS", "NBC"],
                "time_slots": ["evening_news", "primetime"],
                "production_cost": "high",
                "celebrity_endorsement": "yes"
            }),
        },
    ]
}

/// Upsert the demo organizations and, when the `ads` table is empty, insert
/// the fourteen demo placements plus one completed sync run per platform.
///
/// Re-running against an already-seeded database refreshes the organization
/// rows and leaves the ads untouched, so the call is idempotent. Returns the
/// number of ad rows inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails; the whole
/// batch runs inside one transaction and rolls back together.
pub async fn seed_demo_data(pool: &PgPool) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    let mut super_pac_ids = Vec::with_capacity(DEMO_SUPER_PACS.len());
    for pac in &DEMO_SUPER_PACS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO super_pacs (public_id, name, funder, description) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name) DO UPDATE SET \
                 funder = EXCLUDED.funder, \
                 description = EXCLUDED.description, \
                 updated_at = NOW() \
             RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(pac.name)
        .bind(pac.funder.as_str())
        .bind(pac.description)
        .fetch_one(&mut *tx)
        .await?;
        super_pac_ids.push(id);
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ads")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.commit().await?;
        return Ok(0);
    }

    let ads = demo_ads();
    for ad in &ads {
        let (year, month, day) = ad.start;
        let start_date = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .ok_or_else(|| DbError::InvalidRow(format!("bad demo start date for {}", ad.title)))?;

        sqlx::query(
            "INSERT INTO ads \
                 (public_id, title, description, platform, super_pac_id, amount, \
                  target_audience, geographic_target, start_date, impressions, \
                  ad_url, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(Uuid::new_v4())
        .bind(ad.title)
        .bind(ad.description)
        .bind(ad.platform.as_str())
        .bind(super_pac_ids[ad.super_pac])
        .bind(ad.amount)
        .bind(ad.target_audience)
        .bind(ad.geographic_target)
        .bind(start_date)
        .bind(ad.impressions)
        .bind(ad.ad_url)
        .bind(ad.metadata.to_string())
        .execute(&mut *tx)
        .await?;
    }

    // One completed run per platform to give the dashboard sync history.
    for (i, platform) in adwatch_core::platform::ALL_PLATFORMS.iter().enumerate() {
        let records_fetched = i32::try_from(10 + (i * 7) % 50).unwrap_or(10);
        sqlx::query(
            "INSERT INTO ad_sync_logs \
                 (public_id, platform, status, records_fetched, started_at, completed_at) \
             VALUES ($1, $2, $3, $4, NOW() - make_interval(days => $5), NOW())",
        )
        .bind(Uuid::new_v4())
        .bind(platform.as_str())
        .bind(SyncStatus::Completed.as_str())
        .bind(records_fetched)
        .bind(i32::try_from(i).unwrap_or(0))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(ads.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_reconciles_with_baseline_constants() {
        let ads = demo_ads();
        assert_eq!(ads.len(), 14);

        let total: i64 = ads.iter().map(|a| a.amount).sum();
        assert_eq!(total, 10_500_000);

        let open_ai: i64 = ads
            .iter()
            .filter(|a| DEMO_SUPER_PACS[a.super_pac].funder == Funder::OpenAiA16z)
            .map(|a| a.amount)
            .sum();
        assert_eq!(open_ai, 3_430_000);

        let facebook: i64 = ads
            .iter()
            .filter(|a| a.platform == Platform::Facebook)
            .map(|a| a.amount)
            .sum();
        assert_eq!(facebook, 2_520_000);
    }

    #[test]
    fn demo_metadata_blobs_are_valid_json() {
        for ad in demo_ads() {
            let raw = ad.metadata.to_string();
            assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
        }
    }
}
