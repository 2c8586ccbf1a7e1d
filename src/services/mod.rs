pub mod ideal_answers;
pub mod lookup_service;
pub mod question_store;
pub mod random_picker;
pub mod scoring_service;
pub mod similarity;
