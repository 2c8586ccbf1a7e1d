use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::models::question::QuestionItem;

pub fn pick_random(pool: &[QuestionItem]) -> Result<&QuestionItem> {
    pick_random_with(pool, &mut rand::thread_rng())
}

pub fn pick_random_with<'a, R: Rng + ?Sized>(
    pool: &'a [QuestionItem],
    rng: &mut R,
) -> Result<&'a QuestionItem> {
    pool.choose(rng)
        .ok_or_else(|| Error::NoQuestionsFound("empty question pool".to_string()))
}
