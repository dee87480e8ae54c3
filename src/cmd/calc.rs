use anyhow::{Result, bail};
use serde_json::json;

use slimtrack::core::metrics;
use slimtrack::db::Database;
use slimtrack::models::config::Config;
use slimtrack::models::{Profile, Sex};
use slimtrack::output;
use slimtrack::output::human;

use crate::cli::BodyArgs;

/// Saved data used to fill in measurements the user left out.
struct Stored {
    profile: Option<Profile>,
    latest_weight: Option<f64>,
}

impl Stored {
    fn load() -> Result<Self> {
        let db = Database::open(&Config::db_path()?)?;
        Ok(Self {
            profile: db.get_profile()?,
            latest_weight: db.latest_weight()?.map(|e| e.weight_kg),
        })
    }

    fn weight(&self, arg: Option<f64>) -> Result<f64> {
        match arg.or(self.latest_weight) {
            Some(w) => Ok(w),
            None => bail!("--weight is required when no weight has been recorded"),
        }
    }

    fn height_cm(&self, arg: Option<f64>) -> Result<f64> {
        match arg.or_else(|| self.profile.as_ref().map(|p| p.height_cm)) {
            Some(h) => Ok(h),
            None => bail!("--height is required when no profile is saved"),
        }
    }

    fn height_m(&self, arg: Option<f64>) -> Result<f64> {
        match arg.or_else(|| self.profile.as_ref().map(Profile::height_m)) {
            Some(h) => Ok(h),
            None => bail!("--height is required when no profile is saved"),
        }
    }

    fn age(&self, arg: Option<u32>) -> Result<u32> {
        match arg.or_else(|| self.profile.as_ref().map(|p| p.age)) {
            Some(a) => Ok(a),
            None => bail!("--age is required when no profile is saved"),
        }
    }

    fn sex(&self, arg: Option<&str>) -> Result<Sex> {
        match (arg, &self.profile) {
            (Some(s), _) => Ok(s.parse()?),
            (None, Some(p)) => Ok(p.sex),
            (None, None) => bail!("--sex is required when no profile is saved"),
        }
    }

    fn tdee(&self, config: &Config, body: &BodyArgs) -> Result<(f64, f64)> {
        let bmr = metrics::bmr(
            self.weight(body.weight)?,
            self.height_cm(body.height)?,
            self.age(body.age)?,
            self.sex(body.sex.as_deref())?,
        );
        let activity = match (body.activity.as_deref(), &self.profile) {
            (None, Some(p)) => p.activity_level,
            (token, _) => config.activity_level(token),
        };
        Ok((bmr, metrics::tdee(bmr, activity)))
    }
}

pub fn run_bmi(weight: Option<f64>, height_m: Option<f64>, human_flag: bool) -> Result<()> {
    let stored = Stored::load()?;
    let result = metrics::bmi(stored.weight(weight)?, stored.height_m(height_m)?)?;

    if human_flag {
        println!("{}", human::format_bmi(&result));
    } else {
        let out = output::success("calc", json!({ "bmi": result }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_bmr(body: &BodyArgs, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let stored = Stored::load()?;
    let (bmr, tdee) = stored.tdee(&config, body)?;

    if human_flag {
        println!("BMR: {bmr:.2} kcal/day\nTDEE: {tdee:.2} kcal/day");
    } else {
        let out = output::success("calc", json!({ "bmr": bmr, "tdee": tdee }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_deficit(body: &BodyArgs, pace: Option<&str>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let stored = Stored::load()?;
    let (_, tdee) = stored.tdee(&config, body)?;
    let pace = match (pace, stored.profile.as_ref().and_then(|p| p.goal_pace)) {
        (None, Some(saved)) => saved,
        (token, _) => config.goal_pace(token),
    };
    let plan = metrics::deficit_plan(tdee, pace);

    if human_flag {
        println!("{}", human::format_deficit(&plan));
    } else {
        let out = output::success("calc", json!({ "deficit": plan }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_ideal(height_m: Option<f64>, sex: Option<&str>, human_flag: bool) -> Result<()> {
    let stored = Stored::load()?;
    let estimate = metrics::ideal_weight(stored.height_m(height_m)?, stored.sex(sex)?);

    if human_flag {
        println!("{}", human::format_ideal_weight(&estimate));
    } else {
        let out = output::success("calc", json!({ "ideal_weight": estimate }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
