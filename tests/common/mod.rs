#![allow(dead_code)]
use miniclassifiers::Sample;


// Quinlan's weather data.
//
//  outlook   | temperature | humidity | wind   | play
// -----------+-------------+----------+--------+------
//  sunny     | hot         | high     | weak   | no
//  ...       | ...         | ...      | ...    | ...
//  rain      | mild        | high     | strong | no
pub const TENNIS: &[u8] = b"\
outlook\ttemperature\thumidity\twind\tplay
sunny\thot\thigh\tweak\tno
sunny\thot\thigh\tstrong\tno
overcast\thot\thigh\tweak\tyes
rain\tmild\thigh\tweak\tyes
rain\tcool\tnormal\tweak\tyes
rain\tcool\tnormal\tstrong\tno
overcast\tcool\tnormal\tstrong\tyes
sunny\tmild\thigh\tweak\tno
sunny\tcool\tnormal\tweak\tyes
rain\tmild\tnormal\tweak\tyes
sunny\tmild\tnormal\tstrong\tyes
overcast\tmild\thigh\tstrong\tyes
overcast\thot\tnormal\tweak\tyes
rain\tmild\thigh\tstrong\tno
";


pub fn tennis() -> Sample {
    Sample::from_reader(TENNIS, true).unwrap()
}


pub fn sample(bytes: &[u8]) -> Sample {
    Sample::from_reader(bytes, true).unwrap()
}
