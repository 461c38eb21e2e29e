/// WCA ids of the competitors shown in the ranking
///
/// To find a competitor's WCA id:
/// 1. Navigate to https://www.worldcubeassociation.org/persons
/// 2. Search for the competitor by name
/// 3. The profile URL will be: https://www.worldcubeassociation.org/persons/{wca_id}
pub fn get_competitors() -> Vec<&'static str> {
    vec![
        "2008UENO01", "2009OLSO01", "2011HOFF02", "2011RHEI01", "2012ITOR01",
        "2013FERT01", "2013GALA04", "2013KOBA01", "2015FIRM01", "2015GOWT01",
        "2015KUCA01", "2015MATT05", "2015MOHA10", "2015ROBI04", "2015TAKA05",
        "2016MORA24", "2016YENC01", "2017HONG17", "2017PALI04", "2017SZYS01",
        "2018PIKE01", "2018VASY01", "2009LIUE01", "2009YAUR01", "2007VALK01",
        "2010HULL01", "2010UTOM01", "2010WUIF01", "2012BEAH01", "2012GONZ10",
        "2012MCNE01", "2013WANG67", "2014CZAP01", "2014LEES01", "2014RAJE03",
        "2014VORL01", "2014WENW01", "2014YELI01", "2014ZAKR01", "2015CHNG01",
        "2015GROH02", "2015KOVA07", "2015OAKK01", "2015RAOJ01", "2015SING22",
        "2015STAU01", "2015WANG09", "2016KOLA02", "2016MART29", "2016MELN01",
        "2016NUNE11", "2017HUAN77", "2017KIRB01", "2015LEEJ12", "2015LEON02",
        "2018BERE01", "2017TRAN25", "2015MINK04", "2015CHER07", "2013RIGO01",
        "2018MURR03", "2017ENGB01", "2018NGHA02",
    ]
}
