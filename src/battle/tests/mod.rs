pub mod common;

#[cfg(test)]
mod test_action_prevention;


#[cfg(test)]
mod test_battle_loop;

#[cfg(test)]
mod test_end_of_turn;



#[cfg(test)]
mod test_pipeline;

#[cfg(test)]
mod test_switching;

#[cfg(test)]
mod test_targeting;

#[cfg(test)]
mod test_turn_order;
