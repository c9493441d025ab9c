use crate::error::Result;
use crate::utils::crypto::hash_password;
use sqlx::PgPool;
use tracing::info;

/// Inserts the demo companies, users, jobs and applications. Skipped when
/// any user already exists, so a restarted server never duplicates rows.
pub async fn seed_demo_data(pool: &PgPool) -> Result<()> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if user_count > 0 {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO companies (name, description, website, industry, size, location) VALUES
            ('TechCorp Inc.', 'Leading technology solutions provider', 'https://techcorp.com', 'Technology', 'large', 'San Francisco, CA'),
            ('StartupXYZ', 'Innovative startup focused on mobile apps', 'https://startupxyz.com', 'Technology', 'startup', 'Austin, TX'),
            ('Creative Agency', 'Full-service digital marketing agency', 'https://creativeagency.com', 'Marketing', 'medium', 'New York, NY'),
            ('Innovation Labs', 'Research and development company', 'https://innovationlabs.com', 'Technology', 'medium', 'Boston, MA')
        "#,
    )
    .execute(pool)
    .await?;

    let demo_users = [
        ("admin", "admin@recruitwarx.com", "admin123", "admin", "Admin", "User", "+1-555-0001"),
        ("recruiter", "recruiter@recruitwarx.com", "recruiter123", "recruiter", "Jane", "Recruiter", "+1-555-0002"),
        ("candidate", "candidate@recruitwarx.com", "candidate123", "candidate", "John", "Doe", "+1-555-0003"),
    ];
    for (username, email, password, role, first_name, last_name, phone) in demo_users {
        let hash = hash_password(password)?;
        sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, role, first_name, last_name, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(hash)
        .bind(role)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .execute(pool)
        .await?;
    }

    sqlx::query(
        r#"
        INSERT INTO jobs (title, description, requirements, location, salary_min, salary_max, job_type, experience_level, company_id, posted_by, status) VALUES
            ('Senior Software Engineer', 'We are looking for a Senior Software Engineer to join our growing team. You will work on cutting-edge projects using React, Node.js, and AWS.', 'Bachelor degree in Computer Science, 5+ years experience, React, Node.js, AWS', 'San Francisco, CA', 120000, 150000, 'full-time', 'senior', 1, 2, 'active'),
            ('UX/UI Designer', 'Join our creative team as a UX/UI Designer. You will design user-centered digital experiences for our clients.', 'Portfolio required, Figma, Adobe Creative Suite, 3+ years experience', 'New York, NY', 80000, 100000, 'full-time', 'mid', 3, 2, 'active'),
            ('Data Analyst', 'Looking for a Data Analyst to help analyze business metrics and create insightful reports.', 'SQL, Python, Tableau, 2+ years experience', 'Remote', 70000, 90000, 'contract', 'mid', 4, 2, 'active'),
            ('Junior Frontend Developer', 'Perfect opportunity for a Junior Frontend Developer to join our innovative startup.', 'HTML, CSS, JavaScript, React basics, Fresh graduate or 1 year experience', 'Austin, TX', 60000, 75000, 'full-time', 'entry', 2, 2, 'active')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO applications (job_id, candidate_id, status, cover_letter) VALUES
            (1, 3, 'applied', 'I am very interested in this position and believe my skills align well with your requirements.'),
            (2, 3, 'screening', 'I have extensive experience in UX/UI design and would love to contribute to your team.'),
            (3, 3, 'phone_interview', 'My background in data analysis makes me a perfect fit for this role.')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("UPDATE jobs SET application_count = (SELECT COUNT(*) FROM applications WHERE job_id = jobs.id)")
        .execute(pool)
        .await?;

    info!("Demo data seeded");
    Ok(())
}
